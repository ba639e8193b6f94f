//! Edit steps applied by the mutation pipeline

use crate::types::User;

/// A single field change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    SetName(String),
    AddAge(i64),
    SetAge(i64),
    SetAdult(bool),
    SetPhone(String),
    SetFood(String),
    SetGun(String),
    ClearPhone,
    ClearFood,
    ClearGun,
    ClearBag,
}

impl FieldEdit {
    /// Apply the change to a user in place
    ///
    /// Setting an item creates the bag if needed; clearing an item on a user
    /// without a bag does nothing. Age arithmetic saturates at the `i64` bounds.
    pub fn apply(&self, user: &mut User) {
        match self {
            FieldEdit::SetName(name) => user.name = name.clone(),
            FieldEdit::AddAge(delta) => user.age = user.age.saturating_add(*delta),
            FieldEdit::SetAge(age) => user.age = *age,
            FieldEdit::SetAdult(flag) => user.is_adult = *flag,
            FieldEdit::SetPhone(phone) => user.bag_mut().phone = phone.clone(),
            FieldEdit::SetFood(food) => user.bag_mut().food = food.clone(),
            FieldEdit::SetGun(gun) => user.bag_mut().gun = gun.clone(),
            FieldEdit::ClearPhone => {
                if let Some(bag) = user.bag.as_mut() {
                    bag.phone.clear();
                }
            }
            FieldEdit::ClearFood => {
                if let Some(bag) = user.bag.as_mut() {
                    bag.food.clear();
                }
            }
            FieldEdit::ClearGun => {
                if let Some(bag) = user.bag.as_mut() {
                    bag.gun.clear();
                }
            }
            FieldEdit::ClearBag => user.bag = None,
        }
    }
}

/// One mutation: an ordered group of field edits recorded as a single event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditStep {
    edits: Vec<FieldEdit>,
}

impl EditStep {
    /// An empty step
    pub fn new() -> Self {
        Self::default()
    }

    /// A step that renames the user
    pub fn rename(name: impl Into<String>) -> Self {
        Self::new().then(FieldEdit::SetName(name.into()))
    }

    /// Append another edit to this step
    pub fn then(mut self, edit: FieldEdit) -> Self {
        self.edits.push(edit);
        self
    }

    pub fn edits(&self) -> &[FieldEdit] {
        &self.edits
    }

    /// The name this step renames to, if it renames at all
    pub fn target_name(&self) -> Option<&str> {
        self.edits.iter().rev().find_map(|edit| match edit {
            FieldEdit::SetName(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Apply every edit in order
    pub fn apply(&self, user: &mut User) {
        for edit in &self.edits {
            edit.apply(user);
        }
    }
}

/// Names cycled through by the demonstration run
pub const DEMO_NAMES: [&str; 10] = [
    "Sam", "Serj", "Aaron", "Henry", "Steven", "Jackie", "Alex", "Johan", "Bjorn", "Anders",
];

/// The demonstration edit sequence
///
/// Renames through [`DEMO_NAMES`]; the step at index 4 also ages the user by
/// two years, index 6 packs a Cola and index 8 drops the gun.
pub fn demo_edits() -> Vec<EditStep> {
    DEMO_NAMES
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let step = EditStep::rename(*name);
            match idx {
                4 => step.then(FieldEdit::AddAge(2)),
                6 => step.then(FieldEdit::SetFood("Cola".to_string())),
                8 => step.then(FieldEdit::ClearGun),
                _ => step,
            }
        })
        .collect()
}
