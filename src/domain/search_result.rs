/// The three subfields of one result container, each read independently.
/// `None` means the locator for that subfield did not match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResultFields {
    pub headline: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// A fully extracted result, ready for categorization and persistence.
/// Text fields may be empty strings; they are never substituted blanks for
/// a missing locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub headline: String,
    pub url: String,
    pub description: String,
}
