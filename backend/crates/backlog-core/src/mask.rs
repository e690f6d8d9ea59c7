/// Mask an identifying value (organization, project) for log output.
///
/// Keeps the first two characters and replaces the rest with `***`.
/// Values of two characters or fewer are fully masked.
pub fn mask_identifier(value: &str) -> String {
    let prefix: String = value.chars().take(2).collect();
    if value.chars().count() <= 2 {
        return String::from("***");
    }
    format!("{prefix}***")
}
