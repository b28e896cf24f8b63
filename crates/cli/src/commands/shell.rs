//! Interactive shopping session.
//!
//! Each line typed at the prompt is one shopper action. After an action the
//! shell drains the session's event log and re-renders only the parts of the
//! page the events touched.
//!
//! # Commands
//!
//! - `show` - Render the whole page
//! - `go <section>` - Switch section (`catalog`, `about`, `delivery`, `reviews`, `contacts`)
//! - `add <id>` - Add one unit of a product to the cart
//! - `remove <id>` - Remove a product from the cart
//! - `inc <id>` / `dec <id>` - Change a quantity by one
//! - `qty <id> <delta>` - Change a quantity by `delta`
//! - `cart` - Open the cart sheet
//! - `close` - Close the cart sheet
//! - `help` - List commands
//! - `quit` - Leave the shell

use std::io::{BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;

use premium_vape_core::{ProductId, Section, SectionParseError};
use premium_vape_storefront::{
    Catalog, ContentStore, EventLog, Renderer, Session, SessionEvent, StorefrontConfig,
    StorefrontError,
};
use thiserror::Error;

const PROMPT: &str = "> ";

const HELP: &str = "\
show                 показать страницу
go <раздел>          catalog | about | delivery | reviews | contacts
add <id>             добавить товар в корзину
remove <id>          удалить товар из корзины
inc <id> / dec <id>  изменить количество на 1
qty <id> <delta>     изменить количество на delta
cart / close         открыть / закрыть корзину
help                 список команд
quit                 выход";

/// Errors from parsing a line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("unknown command: {0} (type `help`)")]
    UnknownCommand(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("not a number: {0}")]
    InvalidNumber(String),
    #[error(transparent)]
    Section(#[from] SectionParseError),
}

/// One parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Show,
    Go(Section),
    Add(ProductId),
    Remove(ProductId),
    Adjust(ProductId, i32),
    OpenCart,
    CloseCart,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandParseError::MissingArgument("command"));
        };

        let command = match verb.to_lowercase().as_str() {
            "show" => Self::Show,
            "go" => {
                let section = words.next().ok_or(CommandParseError::MissingArgument("section"))?;
                Self::Go(section.parse()?)
            }
            "add" => Self::Add(product_id(words.next())?),
            "remove" | "rm" => Self::Remove(product_id(words.next())?),
            "inc" => Self::Adjust(product_id(words.next())?, 1),
            "dec" => Self::Adjust(product_id(words.next())?, -1),
            "qty" => {
                let id = product_id(words.next())?;
                let delta = words.next().ok_or(CommandParseError::MissingArgument("delta"))?;
                let delta = delta
                    .parse::<i32>()
                    .map_err(|_| CommandParseError::InvalidNumber(delta.to_string()))?;
                Self::Adjust(id, delta)
            }
            "cart" => Self::OpenCart,
            "close" => Self::CloseCart,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandParseError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

fn product_id(word: Option<&str>) -> Result<ProductId, CommandParseError> {
    let word = word.ok_or(CommandParseError::MissingArgument("product id"))?;
    word.parse::<ProductId>()
        .map_err(|_| CommandParseError::InvalidNumber(word.to_string()))
}

/// Run the shell on stdin/stdout.
///
/// # Errors
///
/// Returns an error if reading stdin, writing stdout, or rendering fails.
pub fn start(config: StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(config).run(stdin.lock(), stdout.lock())
}

/// A session wired to a renderer and an event log.
pub struct Shell {
    session: Session,
    renderer: Renderer,
    events: EventLog,
}

impl Shell {
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let mut session = Session::new(Arc::new(Catalog::builtin()), &config);
        let events = EventLog::new();
        session.subscribe(events.clone());
        session.subscribe(|event: &SessionEvent| tracing::debug!(?event, "Shell observed event"));

        Self {
            session,
            renderer: Renderer::new(config, ContentStore::builtin()),
            events,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or if a template fails to render.
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> Result<(), Box<dyn std::error::Error>>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{}", self.renderer.render_page(&self.session)?)?;
        write!(output, "{PROMPT}")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                write!(output, "{PROMPT}")?;
                output.flush()?;
                continue;
            }

            match line.parse::<ShellCommand>() {
                Ok(ShellCommand::Quit) => break,
                Ok(command) => self.execute(command, &mut output)?,
                Err(e) => {
                    tracing::debug!(input = %line, error = %e, "Unparseable command");
                    writeln!(output, "Ошибка: {e}")?;
                }
            }

            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        tracing::info!(
            session_id = %self.session.id(),
            items = self.session.cart().count(),
            "Shell session ended"
        );
        Ok(())
    }

    fn execute<W: Write>(
        &mut self,
        command: ShellCommand,
        output: &mut W,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match command {
            ShellCommand::Show => {
                writeln!(output, "{}", self.renderer.render_page(&self.session)?)?;
            }
            ShellCommand::Help => writeln!(output, "{HELP}")?,
            ShellCommand::Go(section) => {
                self.session.set_section(section);
            }
            ShellCommand::Add(id) => {
                if let Err(e) = self.session.add_to_cart(id) {
                    return report(e, output);
                }
            }
            ShellCommand::Remove(id) => {
                if !self.session.remove_from_cart(id) {
                    writeln!(output, "Товара #{id} нет в корзине")?;
                }
            }
            ShellCommand::Adjust(id, delta) => {
                if self.session.cart().get(id).is_none() {
                    writeln!(output, "Товара #{id} нет в корзине")?;
                } else {
                    self.session.adjust_quantity(id, delta);
                }
            }
            ShellCommand::OpenCart => {
                if !self.session.set_cart_open(true) {
                    // Already open: show it again on request.
                    writeln!(output, "{}", self.renderer.render_cart(self.session.cart())?)?;
                }
            }
            ShellCommand::CloseCart => {
                self.session.set_cart_open(false);
            }
            ShellCommand::Quit => {}
        }

        self.rerender(output)
    }

    /// Re-render the parts of the page affected by pending events.
    fn rerender<W: Write>(&self, output: &mut W) -> Result<(), Box<dyn std::error::Error>> {
        let events = self.events.drain();
        if events.is_empty() {
            return Ok(());
        }

        let section_changed = events
            .iter()
            .any(|e| matches!(e, SessionEvent::SectionChanged { .. }));
        let cart_touched = events.iter().any(|e| {
            matches!(
                e,
                SessionEvent::CartChanged { .. }
                    | SessionEvent::CartVisibilityChanged { open: true }
            )
        });

        writeln!(output, "{}", self.renderer.render_header(&self.session)?)?;
        if section_changed {
            writeln!(
                output,
                "{}",
                self.renderer
                    .render_section(self.session.section(), self.session.catalog())?
            )?;
        }
        if cart_touched && self.session.is_cart_open() {
            writeln!(output, "{}", self.renderer.render_cart(self.session.cart())?)?;
        }
        Ok(())
    }
}

/// Show a shopper-caused error and keep going; propagate anything else.
fn report<W: Write>(
    error: StorefrontError,
    output: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    if error.is_client_error() {
        tracing::warn!(error = %error, "Command rejected");
        writeln!(output, "Ошибка: {error}")?;
        Ok(())
    } else {
        Err(error.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use premium_vape_core::Price;

    use super::*;

    fn run_script(script: &str) -> (Shell, String) {
        let mut shell = Shell::new(StorefrontConfig::default());
        let mut output = Vec::new();
        shell.run(script.as_bytes(), &mut output).unwrap();
        (shell, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("show".parse::<ShellCommand>().unwrap(), ShellCommand::Show);
        assert_eq!(
            "go Reviews".parse::<ShellCommand>().unwrap(),
            ShellCommand::Go(Section::Reviews)
        );
        assert_eq!(
            "add 3".parse::<ShellCommand>().unwrap(),
            ShellCommand::Add(ProductId::new(3))
        );
        assert_eq!(
            "dec 2".parse::<ShellCommand>().unwrap(),
            ShellCommand::Adjust(ProductId::new(2), -1)
        );
        assert_eq!(
            "qty 1 -1000".parse::<ShellCommand>().unwrap(),
            ShellCommand::Adjust(ProductId::new(1), -1000)
        );
        assert_eq!("EXIT".parse::<ShellCommand>().unwrap(), ShellCommand::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "buy 1".parse::<ShellCommand>().unwrap_err(),
            CommandParseError::UnknownCommand("buy".to_string())
        );
        assert_eq!(
            "add".parse::<ShellCommand>().unwrap_err(),
            CommandParseError::MissingArgument("product id")
        );
        assert_eq!(
            "add one".parse::<ShellCommand>().unwrap_err(),
            CommandParseError::InvalidNumber("one".to_string())
        );
        assert!(matches!(
            "go checkout".parse::<ShellCommand>().unwrap_err(),
            CommandParseError::Section(_)
        ));
    }

    #[test]
    fn test_shopping_script() {
        let (shell, output) = run_script("add 1\nadd 1\nadd 2\nquit\nadd 3\n");
        let cart = shell.session().cart();
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), Price::new(41970));
        assert!(output.contains("Итого: 41 970 ₽"));
        assert!(output.contains("Корзина (3)"));
    }

    #[test]
    fn test_unknown_product_is_reported_and_shell_continues() {
        let (shell, output) = run_script("add 99\nadd 5\n");
        assert!(output.contains("Ошибка: Product not found: 99"));
        assert_eq!(shell.session().cart().count(), 1);
    }

    #[test]
    fn test_dec_never_removes() {
        let (shell, output) = run_script("add 4\ndec 4\ndec 4\nqty 4 -1000\n");
        let entry = shell.session().cart().get(ProductId::new(4)).unwrap();
        assert_eq!(entry.quantity(), 1);
        assert!(!output.contains("Ошибка"));
    }

    #[test]
    fn test_missing_entry_messages() {
        let (_shell, output) = run_script("remove 2\ninc 2\n");
        assert_eq!(output.matches("Товара #2 нет в корзине").count(), 2);
    }

    #[test]
    fn test_go_renders_section() {
        let (shell, output) = run_script("go contacts\n");
        assert_eq!(shell.session().section(), Section::Contacts);
        assert!(output.contains("Режим работы"));
        assert!(output.contains("[Контакты]"));
    }

    #[test]
    fn test_close_and_reopen_cart() {
        let (shell, _output) = run_script("add 6\nclose\n");
        assert!(!shell.session().is_cart_open());

        let (shell, output) = run_script("cart\ncart\n");
        assert!(shell.session().is_cart_open());
        assert_eq!(output.matches("Корзина пуста").count(), 2);
    }

    #[test]
    fn test_parse_error_does_not_stop_shell() {
        let (shell, output) = run_script("frobnicate\ngo about\n");
        assert!(output.contains("unknown command: frobnicate"));
        assert_eq!(shell.session().section(), Section::About);
    }
}
