/// One input query string, as recorded at the start of its run iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    pub id: i64,
    pub text: String,
}
