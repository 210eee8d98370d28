/// Unit types known to the client, indexed by unit id.
///
/// Only the length matters when generating fixtures (it bounds `unitIds`),
/// but the names keep the meaning of each id visible.
pub const UNIT_TYPES: [&str; 13] = [
    "singular",
    "grams",
    "millilitres",
    "tsp",
    "tbs",
    "cups",
    "bunch",
    "rashers",
    "head",
    "sprig",
    "stalk",
    "sheets",
    "slice",
];

pub const NUM_UNIT_TYPES: u32 = UNIT_TYPES.len() as u32;

/// Number of foods in one page of the sample food list; `foodId` indexes into it.
pub const FOOD_PAGE_SIZE: u32 = 30;

/// Look up the name of a unit id from the built-in table
pub fn unit_name(unit_id: u32) -> Option<&'static str> {
    UNIT_TYPES.get(unit_id as usize).copied()
}
