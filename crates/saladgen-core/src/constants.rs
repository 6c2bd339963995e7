/// Saladgen system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default composition limits, one `(min, max)` pair per ingredient kind.
/// These mirror a conventional salad: one or two bases, a handful of
/// toppings, some protein, exactly one dressing.
pub const DEFAULT_BASE_RANGE: (u32, u32) = (1, 2);
pub const DEFAULT_TOPPING_RANGE: (u32, u32) = (3, 6);
pub const DEFAULT_PROTEIN_RANGE: (u32, u32) = (1, 2);
pub const DEFAULT_DRESSING_RANGE: (u32, u32) = (1, 1);

/// Percentage cutoff used by `Ingredient::top_flavors` when none is supplied.
pub const DEFAULT_TOP_FLAVOR_PCT: u32 = 25;
