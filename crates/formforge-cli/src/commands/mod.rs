//! Built-in management commands.

pub mod check;
pub mod createtoken;
pub mod runserver;

pub use check::CheckCommand;
pub use createtoken::CreatetokenCommand;
pub use runserver::RunserverCommand;

use crate::command::CommandRegistry;

/// Registers every built-in command into the given registry.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(RunserverCommand));
    registry.register(Box::new(CheckCommand));
    registry.register(Box::new(CreatetokenCommand));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_commands_registered() {
        let mut registry = CommandRegistry::new();
        register_builtin_commands(&mut registry);
        assert_eq!(
            registry.list_commands(),
            vec!["check", "createtoken", "runserver"]
        );
    }
}
