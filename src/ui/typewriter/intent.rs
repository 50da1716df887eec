use crate::ui::mvi::Intent;

use super::role_cycle::RoleCycle;

#[derive(Debug, Clone)]
pub enum TypewriterIntent {
    /// The pending timer fired.
    Tick { roles: RoleCycle },
}

impl Intent for TypewriterIntent {}
