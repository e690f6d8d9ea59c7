/// Per-client knobs taken from configuration
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub api_version: String,
    /// Work item ids per detail request
    pub batch_size: usize,
    /// `$top` ceiling on WIQL results
    pub max_results: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_version: String::from("7.0"),
            batch_size: 200,
            max_results: 20_000,
        }
    }
}
