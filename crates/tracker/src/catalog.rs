use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// MET used for any exercise the catalog does not know.
pub const DEFAULT_MET: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
    Cardio,
    #[default]
    Other,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 8] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Arms,
        MuscleGroup::Legs,
        MuscleGroup::Core,
        MuscleGroup::Cardio,
        MuscleGroup::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Arms => "arms",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Core => "core",
            MuscleGroup::Cardio => "cardio",
            MuscleGroup::Other => "other",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MuscleGroup::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown muscle group: {}", s))
    }
}

/// A built-in exercise with its metabolic equivalent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub met: f64,
}

const fn entry(name: &'static str, muscle_group: MuscleGroup, met: f64) -> CatalogEntry {
    CatalogEntry {
        name,
        muscle_group,
        met,
    }
}

pub const BUILTIN_EXERCISES: &[CatalogEntry] = &[
    entry("Жим лежа", MuscleGroup::Chest, 6.0),
    entry("Жим гантелей", MuscleGroup::Chest, 6.0),
    entry("Разводка гантелей", MuscleGroup::Chest, 5.0),
    entry("Отжимания на брусьях", MuscleGroup::Chest, 8.0),
    entry("Подтягивания", MuscleGroup::Back, 8.0),
    entry("Тяга штанги", MuscleGroup::Back, 6.0),
    entry("Тяга гантели", MuscleGroup::Back, 5.5),
    entry("Тяга верхнего блока", MuscleGroup::Back, 5.0),
    entry("Приседания", MuscleGroup::Legs, 8.0),
    entry("Жим ногами", MuscleGroup::Legs, 7.0),
    entry("Выпады", MuscleGroup::Legs, 6.5),
    entry("Разгибания ног", MuscleGroup::Legs, 5.0),
    entry("Жим стоя", MuscleGroup::Shoulders, 6.0),
    entry("Махи в стороны", MuscleGroup::Shoulders, 4.5),
    entry("Тяга к подбородку", MuscleGroup::Shoulders, 5.5),
    entry("Подъем на бицепс", MuscleGroup::Arms, 5.0),
    entry("Французский жим", MuscleGroup::Arms, 5.0),
    entry("Молотки", MuscleGroup::Arms, 5.0),
    entry("Разгибания на трицепс", MuscleGroup::Arms, 4.5),
];

const fn same_name(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn has_duplicate_names(entries: &[CatalogEntry]) -> bool {
    let mut i = 0;
    while i < entries.len() {
        let mut j = i + 1;
        while j < entries.len() {
            if same_name(entries[i].name, entries[j].name) {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

// A repeated name would make one of the two MET values unreachable.
const _: () = assert!(
    !has_duplicate_names(BUILTIN_EXERCISES),
    "duplicate exercise name in BUILTIN_EXERCISES"
);

lazy_static! {
    static ref BUILTIN_INDEX: HashMap<&'static str, &'static CatalogEntry> = BUILTIN_EXERCISES
        .iter()
        .map(|entry| (entry.name, entry))
        .collect();
}

pub fn find_builtin(name: &str) -> Option<&'static CatalogEntry> {
    BUILTIN_INDEX.get(name).copied()
}

/// Resolves exercise names to MET values.
///
/// Custom exercises registered by the user take precedence over the built-in
/// catalog; anything unknown falls back to [`DEFAULT_MET`].
#[derive(Debug, Clone, Default)]
pub struct MetTable {
    custom: HashMap<String, f64>,
}

impl MetTable {
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn with_custom<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        for (name, met) in entries {
            if met.is_finite() && met > 0.0 {
                self.custom.insert(name.into(), met);
            }
        }
        self
    }

    pub fn met_for(&self, name: &str) -> f64 {
        self.custom
            .get(name)
            .copied()
            .or_else(|| find_builtin(name).map(|entry| entry.met))
            .unwrap_or(DEFAULT_MET)
    }

    pub fn custom_len(&self) -> usize {
        self.custom.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_unique_names() {
        assert!(!has_duplicate_names(BUILTIN_EXERCISES));
        assert_eq!(BUILTIN_INDEX.len(), BUILTIN_EXERCISES.len());
    }

    #[test]
    fn test_duplicate_detection() {
        let entries = [
            entry("Молотки", MuscleGroup::Arms, 5.0),
            entry("Выпады", MuscleGroup::Legs, 6.5),
            entry("Молотки", MuscleGroup::Arms, 4.0),
        ];
        assert!(has_duplicate_names(&entries));
        assert!(!has_duplicate_names(&entries[..2]));
    }

    #[test]
    fn test_met_lookup() {
        let table = MetTable::builtin();
        assert_eq!(table.met_for("Приседания"), 8.0);
        assert_eq!(table.met_for("Махи в стороны"), 4.5);
        assert_eq!(table.met_for("Burpees"), DEFAULT_MET);
        assert_eq!(table.met_for(""), DEFAULT_MET);
    }

    #[test]
    fn test_custom_overrides_builtin() {
        let table = MetTable::builtin().with_custom([("Приседания", 9.5), ("Burpees", 8.0)]);
        assert_eq!(table.met_for("Приседания"), 9.5);
        assert_eq!(table.met_for("Burpees"), 8.0);
        assert_eq!(table.custom_len(), 2);
    }

    #[test]
    fn test_custom_ignores_invalid_met() {
        let table = MetTable::builtin().with_custom([("Plank", 0.0), ("Row", f64::NAN)]);
        assert_eq!(table.custom_len(), 0);
        assert_eq!(table.met_for("Plank"), DEFAULT_MET);
    }

    #[test]
    fn test_muscle_group_parsing() {
        assert_eq!("Legs".parse::<MuscleGroup>(), Ok(MuscleGroup::Legs));
        assert_eq!(" cardio ".parse::<MuscleGroup>(), Ok(MuscleGroup::Cardio));
        assert!("neck".parse::<MuscleGroup>().is_err());
    }
}
