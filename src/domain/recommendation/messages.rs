//! Fixed messages of the recommendation contract. Callers match on these
//! strings, so they are defined once here rather than inlined at the raise
//! site.

pub const USER_ID_BLANK: &str = "User Id cannot be null, empty or whitespace.";

pub const MIN_RATING_NEGATIVE: &str = "The minimum rating required should be non-negative";

pub const MIN_RATING_COUNT_NEGATIVE: &str =
    "The minimum number of ratings required should be non-negative";

pub const CATEGORY_LIST_MISSING: &str = "The category list must be provided";

pub const CATEGORY_LIST_EMPTY: &str = "The category list cannot be empty";

pub const RETRIEVAL_FAILED: &str = "Error retrieving recommended resources";
