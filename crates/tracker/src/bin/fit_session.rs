use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracker::{
    MetTable, SessionAction, SessionDriver, SessionOutcome, WorkoutSession, WorkoutsClient,
    calculators::{self, ActivityLevel, Sex},
    client::DEFAULT_API_URL,
    command::HELP,
    session::DEFAULT_BODY_WEIGHT_KG,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fit-session")]
#[command(about = "Live workout tracker and training calculators", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "FITTRACK_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, env = "FITTRACK_TOKEN")]
    token: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Track a workout interactively and save it to the API
    Run {
        #[arg(long, default_value_t = DEFAULT_BODY_WEIGHT_KG)]
        body_weight: f64,

        #[arg(long)]
        name: Option<String>,
    },
    /// Training calculators
    Calc {
        #[command(subcommand)]
        calculator: Calculator,
    },
}

#[derive(Subcommand)]
enum Calculator {
    OneRm {
        weight: f64,
        reps: u32,
    },
    Bmr {
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        age: u32,
        #[arg(long, default_value = "male")]
        sex: Sex,
        #[arg(long, default_value = "moderate")]
        activity: ActivityLevel,
    },
    Plates {
        target: Decimal,
        #[arg(long, default_value = "20")]
        bar: Decimal,
    },
    IdealWeight {
        height: f64,
        #[arg(long, default_value = "male")]
        sex: Sex,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("fit_session={},tracker={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Run { body_weight, name } => {
            let client = WorkoutsClient::new(cli.api_url, cli.token)?;
            handle_run(client, body_weight, name).await?;
        }
        Commands::Calc { calculator } => handle_calc(calculator)?,
    }

    Ok(())
}

async fn load_met_table(client: &WorkoutsClient) -> MetTable {
    match client.list_exercises().await {
        Ok(exercises) => {
            let table = MetTable::builtin().with_custom(
                exercises
                    .into_iter()
                    .filter(|ex| ex.is_custom)
                    .map(|ex| (ex.name, ex.met_value)),
            );
            tracing::info!("Loaded {} custom exercises", table.custom_len());
            table
        }
        Err(e) => {
            tracing::warn!("Could not load custom exercises, using built-in MET values: {}", e);
            MetTable::builtin()
        }
    }
}

async fn handle_run(
    client: WorkoutsClient,
    body_weight: f64,
    name: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mets = load_met_table(&client).await;

    let mut session = WorkoutSession::today();
    session.set_body_weight(body_weight);
    if let Some(name) = name {
        session.set_name(name);
    }

    let (handle, task) = SessionDriver::new(session, client, mets.clone()).spawn();

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let action = match line.parse::<SessionAction>() {
            Ok(action) => action,
            Err(e) => {
                println!("! {}", e);
                continue;
            }
        };

        match handle.send(action).await {
            Ok(SessionOutcome::Updated(session)) => print_session(&session, &mets),
            Ok(SessionOutcome::Saved { workout, session }) => {
                println!("Draft saved as {}", workout.id);
                print_session(&session, &mets);
            }
            Ok(SessionOutcome::Finished(workout)) => {
                println!(
                    "Workout '{}' saved as {} ({} kcal)",
                    workout.document.name, workout.id, workout.document.calories_burned
                );
                break;
            }
            Ok(SessionOutcome::Closed) => break,
            Err(e) => println!("! {}", e),
        }
    }

    drop(handle);
    let session = task.await?;
    tracing::debug!("Session closed with {} exercises", session.exercises().len());

    Ok(())
}

fn print_session(session: &WorkoutSession, mets: &MetTable) {
    let timer = session.timer();
    let state = match (timer.is_started(), timer.is_paused()) {
        (false, _) => "stopped",
        (true, true) => "paused",
        (true, false) => "running",
    };

    let name = if session.name().is_empty() {
        tracker::session::DEFAULT_WORKOUT_NAME
    } else {
        session.name()
    };

    println!(
        "{} | {} | {} [{}] | rest {}s | {} kg | ~{} kcal",
        name,
        session.date(),
        timer.formatted(),
        state,
        session.rest_time_seconds(),
        session.body_weight_kg(),
        session.estimate_calories(mets)
    );

    for exercise in session.exercises() {
        let title = if exercise.name.is_empty() {
            "(unnamed)"
        } else {
            exercise.name.as_str()
        };
        println!("  #{} {} [{}]", exercise.id(), title, exercise.kind.as_str());
        for set in &exercise.sets {
            print!("    set {}: {} kg x {}", set.id(), set.weight, set.reps);
            for (i, drop) in set.drops.iter().enumerate() {
                print!(" | drop {}: {} kg x {}", i, drop.weight, drop.reps);
            }
            println!();
        }
    }
}

fn handle_calc(calculator: Calculator) -> Result<(), Box<dyn std::error::Error>> {
    match calculator {
        Calculator::OneRm { weight, reps } => {
            let result = calculators::one_rep_max(weight, reps)
                .ok_or("weight must be positive and reps between 1 and 36")?;
            println!("1RM: {} kg", result.one_rep_max);
            for p in result.percentages {
                println!("  {}%: {} kg", p.percent, p.weight);
            }
        }
        Calculator::Bmr {
            weight,
            height,
            age,
            sex,
            activity,
        } => {
            let result = calculators::energy_expenditure(weight, height, age, sex, activity)
                .ok_or("weight, height and age must be positive")?;
            println!("BMR: {} kcal", result.bmr);
            println!("TDEE: {} kcal", result.tdee);
        }
        Calculator::Plates { target, bar } => {
            let result = calculators::plate_loadout(target, bar)
                .ok_or("target must be at least the bar weight")?;
            println!("Per side: {} kg", result.per_side);
            for plate in result.plates {
                println!("  {} x {} kg", plate.count, plate.weight);
            }
            if !result.remainder.is_zero() {
                println!("Unloadable remainder: {} kg per side", result.remainder);
            }
        }
        Calculator::IdealWeight { height, sex } => {
            let result =
                calculators::ideal_weight(height, sex).ok_or("height must be positive")?;
            println!("Devine: {} kg", result.devine);
            println!("Robinson: {} kg", result.robinson);
            println!("Miller: {} kg", result.miller);
            println!("Average: {} kg", result.average);
        }
    }

    Ok(())
}
