use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::grid::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    /// Space: pause or resume a running session, or start a new one after game over.
    Toggle,
    Restart,
    Quit,
    None,
}

/// Translates a terminal key press into a command for the host loop.
pub fn command_for(key: KeyEvent) -> Command {
    if key.kind != KeyEventKind::Press {
        return Command::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    match key.code {
        KeyCode::Up => Command::Turn(Direction::Up),
        KeyCode::Down => Command::Turn(Direction::Down),
        KeyCode::Left => Command::Turn(Direction::Left),
        KeyCode::Right => Command::Turn(Direction::Right),
        KeyCode::Char(' ') => Command::Toggle,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char(c) => c
            .to_string()
            .parse::<Direction>()
            .map(Command::Turn)
            .unwrap_or(Command::None),
        _ => Command::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(command_for(press(KeyCode::Up)), Command::Turn(Direction::Up));
        assert_eq!(command_for(press(KeyCode::Down)), Command::Turn(Direction::Down));
        assert_eq!(command_for(press(KeyCode::Left)), Command::Turn(Direction::Left));
        assert_eq!(command_for(press(KeyCode::Right)), Command::Turn(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(command_for(press(KeyCode::Char('w'))), Command::Turn(Direction::Up));
        assert_eq!(command_for(press(KeyCode::Char('A'))), Command::Turn(Direction::Left));
        assert_eq!(command_for(press(KeyCode::Char('s'))), Command::Turn(Direction::Down));
        assert_eq!(command_for(press(KeyCode::Char('D'))), Command::Turn(Direction::Right));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for(press(KeyCode::Char(' '))), Command::Toggle);
        assert_eq!(command_for(press(KeyCode::Char('r'))), Command::Restart);
        assert_eq!(command_for(press(KeyCode::Char('q'))), Command::Quit);
        assert_eq!(command_for(press(KeyCode::Esc)), Command::Quit);
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Command::Quit
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(command_for(press(KeyCode::Char('x'))), Command::None);
        assert_eq!(command_for(press(KeyCode::Enter)), Command::None);
        assert_eq!(command_for(press(KeyCode::Tab)), Command::None);
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(command_for(release), Command::None);
    }
}
