/// Lower-cases an identifier, inserting a hyphen wherever a lowercase letter
/// is followed by an uppercase one (`numQubits` becomes `num-qubits`).
pub fn kebab_case(identifier: &str) -> String {
    let mut kebab = String::with_capacity(identifier.len() + 4);
    let mut previous_was_lower = false;

    for c in identifier.chars() {
        if previous_was_lower && c.is_uppercase() {
            kebab.push('-');
        }

        previous_was_lower = c.is_lowercase();
        kebab.extend(c.to_lowercase());
    }

    kebab
}

/// The short alias a parameter would like to have, before collisions are considered.
pub fn alias_candidate(identifier: &str) -> Option<char> {
    let first = identifier.chars().next()?;

    first
        .is_alphabetic()
        .then(|| first.to_lowercase().next())
        .flatten()
}
