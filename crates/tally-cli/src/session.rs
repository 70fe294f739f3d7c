//! Interactive sessions driving the core engines from stdin.
//!
//! Both sessions read one line at a time until EOF or `quit`. Errors from the
//! core are reported as notifications and never end the session; only I/O
//! failures and invalid startup configuration do.

use anyhow::{Context, Result};
use jiff::Timestamp;
use log::debug;
use tally_core::{
    calculator::{CalculatorBuilder, Headless, Surface},
    display::{IntakeEntries, LocalDateTime, Progress, Readout},
    notify::{Banner, Notification, Severity},
    number::format_decimal,
    tracker::TrackerBuilder,
    Calculator, IntakeLog, Key, Reminder, TallyError,
};
use tokio::{
    io::{self, AsyncBufReadExt, BufReader, Lines, Stdin},
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
};

use crate::{
    cli::{CalcArgs, WaterArgs, WaterCommand, WaterLine},
    renderer::TerminalRenderer,
};

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

fn stdin_lines() -> Lines<BufReader<Stdin>> {
    BufReader::new(io::stdin()).lines()
}

/// Surface that prints every display update as it happens.
struct TraceSurface;

impl Surface for TraceSurface {
    fn show(&mut self, text: &str) {
        println!("  {text}");
    }
}

/// Calculator driven by key sequences.
pub struct CalcSession {
    calc: Calculator<Box<dyn Surface>>,
    renderer: TerminalRenderer,
}

impl CalcSession {
    /// Evaluates `args.keys` and prints the readout, or reads key lines from
    /// stdin when no keys were given.
    pub async fn run(args: CalcArgs, renderer: TerminalRenderer) -> Result<()> {
        let surface: Box<dyn Surface> = if args.trace {
            Box::new(TraceSurface)
        } else {
            Box::new(Headless)
        };
        let calc = CalculatorBuilder::from(&args)
            .with_surface(surface)
            .build()
            .context("Invalid calculator configuration")?;
        let mut session = Self { calc, renderer };

        match args.keys {
            Some(keys) => {
                let keys = Key::parse_sequence(&keys)
                    .with_context(|| format!("Invalid key sequence '{keys}'"))?;
                session.press_all(keys);
                session.show_readout();
                Ok(())
            }
            None => session.interactive().await,
        }
    }

    async fn interactive(&mut self) -> Result<()> {
        let mut lines = stdin_lines();
        self.show_readout();

        while let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read from stdin")?
        {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if QUIT_WORDS.contains(&line) {
                break;
            }
            match Key::parse_sequence(line) {
                Ok(keys) => self.press_all(keys),
                Err(err) => self.report(&err),
            }
            self.show_readout();
        }
        debug!("calculator session ended");
        Ok(())
    }

    /// Presses keys in order. A rejected key is reported and the rest still
    /// run, the way a keypad keeps accepting presses after an error.
    fn press_all(&mut self, keys: Vec<Key>) {
        for key in keys {
            if let Err(err) = self.calc.press(key) {
                self.report(&err);
            }
        }
    }

    /// Errors that put the calculator in its error state are shown as
    /// errors; the rest (clamped memory, unusable operands) as notes.
    fn report(&self, err: &TallyError) {
        let severity = if err.is_expression_error() {
            Severity::Error
        } else {
            Severity::Default
        };
        self.renderer
            .notification(&Notification::new(err.to_string(), severity));
    }

    fn show_readout(&self) {
        self.renderer.render(&Readout(&self.calc).to_string());
    }
}

/// Outcome of handling one water session line.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Water intake log with a reminder and a banner.
pub struct WaterSession {
    log: IntakeLog,
    reminder: Reminder,
    banner: Banner,
    tx: UnboundedSender<Notification>,
    rx: UnboundedReceiver<Notification>,
    renderer: TerminalRenderer,
}

impl WaterSession {
    /// Builds the log from `args` and starts the reminder if one was asked
    /// for. Must be called from within a tokio runtime.
    pub fn start(args: &WaterArgs, renderer: TerminalRenderer) -> Result<Self> {
        let log = TrackerBuilder::from(args)
            .build()
            .context("Invalid tracker configuration")?;
        let (tx, rx) = mpsc::unbounded_channel();

        let mut session = Self {
            log,
            reminder: Reminder::new(),
            banner: Banner::default(),
            tx,
            rx,
            renderer,
        };
        if let Some(minutes) = args.remind {
            session
                .reminder
                .start(minutes, session.tx.clone())
                .context("Invalid reminder interval")?;
        }
        Ok(session)
    }

    pub async fn run(mut self) -> Result<()> {
        let mut lines = stdin_lines();
        self.renderer.render(&Progress(&self.log).to_string());

        loop {
            tokio::select! {
                biased;

                line = lines.next_line() => {
                    let Some(line) = line.context("Failed to read from stdin")? else {
                        break;
                    };
                    if self.handle_line(&line)? == Flow::Quit {
                        break;
                    }
                }
                Some(notification) = self.rx.recv() => self.post(notification),
            }
        }

        self.reminder.stop();
        debug!("water session ended");
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        match WaterLine::parse_line(line) {
            Ok(command) => self.handle_command(command),
            Err(err) => {
                // Also covers `help`, which clap reports as an "error"
                self.renderer.raw(err.render().to_string().trim_end());
                Ok(Flow::Continue)
            }
        }
    }

    fn handle_command(&mut self, command: WaterCommand) -> Result<Flow> {
        use WaterCommand::*;

        match command {
            Add { amount } => match self.log.record(amount) {
                Ok(recorded) => {
                    self.show_progress();
                    if recorded.goal_reached {
                        self.notify(
                            "🎉 Congratulations! You reached your daily goal!",
                            Severity::Success,
                        );
                    }
                }
                Err(err) => self.notify_error(&err),
            },
            Remove { index } => match self.log.remove(index) {
                Ok(entry) => {
                    self.notify(
                        format!("Removed {}ml", format_decimal(entry.amount)),
                        Severity::Info,
                    );
                    self.show_progress();
                }
                Err(err) => self.notify_error(&err),
            },
            Goal { goal } => match self.log.set_goal(goal) {
                Ok(()) => {
                    self.notify("Goal updated!", Severity::Success);
                    self.show_progress();
                }
                Err(err) => self.notify_error(&err),
            },
            Remind { minutes } => match self.reminder.start(minutes, self.tx.clone()) {
                Ok(()) => self.notify(self.reminder.status(), Severity::Info),
                Err(err) => self.notify_error(&err),
            },
            Stop => {
                if self.reminder.stop() {
                    self.notify("Reminder stopped", Severity::Info);
                } else {
                    self.notify(self.reminder.status(), Severity::Default);
                }
            }
            Reset => {
                self.log.reset_daily();
                self.notify("Daily progress reset", Severity::Info);
                self.show_progress();
            }
            Status => self.show_status(),
            Log => self
                .renderer
                .render(&IntakeEntries(self.log.entries()).to_string()),
            Export => {
                let json = self.log.to_json().context("Failed to export log")?;
                self.renderer.raw(&json);
            }
            Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn show_progress(&self) {
        self.renderer.render(&Progress(&self.log).to_string());
    }

    fn show_status(&self) {
        self.show_progress();

        let mut markdown = format!("*{}*\n", self.reminder.status());
        if let Some(last) = self.log.entries().last() {
            markdown.push_str(&format!(
                "Last drink: {}\n",
                LocalDateTime(&last.timestamp)
            ));
        }
        self.renderer.render(&markdown);

        if let Some(notification) = self.banner.visible(Timestamp::now()) {
            self.renderer.notification(notification);
        }
    }

    fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.post(Notification::new(message, severity));
    }

    fn notify_error(&mut self, err: &TallyError) {
        self.notify(err.to_string(), Severity::Error);
    }

    /// Shows a notification and makes it the banner, replacing the last one.
    fn post(&mut self, notification: Notification) {
        self.renderer.notification(&notification);
        self.banner.post(notification, Timestamp::now());
    }
}
