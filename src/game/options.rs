use crate::board::Role;

/// Per-game rule switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOptions {
    /// Role a pawn becomes when a request reaches the last rank without naming one
    pub default_promotion: Role,
    /// Accept moves that leave the mover's own king attacked
    pub allow_self_check: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            default_promotion: Role::Queen,
            allow_self_check: false,
        }
    }
}

impl GameOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One line per option in `name=value` form.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("default promotion={}", self.default_promotion.to_char()),
            format!("allow self check={}", self.allow_self_check),
        ]
    }

    /// Set an option by name, case-insensitively.
    ///
    /// Returns false when the name is unknown or the value does not parse;
    /// the option keeps its previous value in that case.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> bool {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "default promotion" | "promotion" => {
                let role = value
                    .and_then(|v| v.trim().chars().next())
                    .and_then(Role::from_char)
                    .filter(|role| role.is_promotion_target());
                if let Some(role) = role {
                    self.default_promotion = role;
                    return true;
                }
            }
            "allow self check" => {
                if let Some(v) = value {
                    self.allow_self_check =
                        matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1");
                    return true;
                }
            }
            _ => {}
        }
        false
    }
}
