use std::fs::{File, create_dir_all};
use std::io::{self, Write};
use std::path::Path;

/// Log event types that determine which receivers should log the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEvent {
    /// Every record found by the scanners
    Scan,
    /// Per-round auction outcome (winner, instantaneous gains)
    Round,
    /// Summary of one tournament between two agents
    Experiment,
    /// Report-level results (series lengths, charts written)
    Report,
    /// Extraction failures and consistency warnings
    Validation,
}

impl LogEvent {
    /// Events that are on or above this one
    /// Hierarchy: Scan -> Round -> Experiment -> Report -> Validation
    fn upward(self) -> &'static [LogEvent] {
        static ALL: [LogEvent; 5] = [
            LogEvent::Scan,
            LogEvent::Round,
            LogEvent::Experiment,
            LogEvent::Report,
            LogEvent::Validation,
        ];
        let start = ALL.iter().position(|e| *e == self).unwrap_or(0);
        &ALL[start..]
    }
}

/// Trait for log receivers that can receive log messages
pub trait LogReceiver {
    /// Check if this receiver should handle the given log event
    fn should_log(&self, event: LogEvent) -> bool;

    /// Write a string to this receiver
    fn write(&mut self, s: &str) -> io::Result<()>;

    /// Flush this receiver
    fn flush(&mut self) -> io::Result<()>;
}

/// Console log receiver (writes to stdout)
pub struct ConsoleReceiver {
    enabled_events: Vec<LogEvent>,
}

impl ConsoleReceiver {
    /// Create a new console receiver
    /// Returns a boxed receiver ready to be added to a logger
    pub fn new(enabled_events: Vec<LogEvent>) -> Box<dyn LogReceiver> {
        Box::new(Self { enabled_events })
    }
}

impl LogReceiver for ConsoleReceiver {
    fn should_log(&self, event: LogEvent) -> bool {
        self.enabled_events.contains(&event)
    }

    fn write(&mut self, s: &str) -> io::Result<()> {
        print!("{}", s);
        io::stdout().flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// File log receiver (writes to a file)
pub struct FileReceiver {
    file: File,
    enabled_events: Vec<LogEvent>,
}

impl FileReceiver {
    /// Create a new file receiver that writes to the specified path
    /// The file is truncated if it exists and parent directories are created if needed
    pub fn new(path: &Path, enabled_events: Vec<LogEvent>) -> io::Result<Box<dyn LogReceiver>> {
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Box::new(Self { file, enabled_events }))
    }
}

impl LogReceiver for FileReceiver {
    fn should_log(&self, event: LogEvent) -> bool {
        self.enabled_events.contains(&event)
    }

    fn write(&mut self, s: &str) -> io::Result<()> {
        write!(self.file, "{}", s)?;
        self.file.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Main logger that manages multiple receivers
pub struct Logger {
    receivers: Vec<Box<dyn LogReceiver>>,
}

impl Logger {
    /// Create a new logger with no receivers
    pub fn new() -> Self {
        Self {
            receivers: Vec::new(),
        }
    }

    /// Add a receiver to the logger
    pub fn add_receiver(&mut self, receiver: Box<dyn LogReceiver>) {
        self.receivers.push(receiver);
    }

    /// Write a message with a specific log event type
    pub fn log(&mut self, event: LogEvent, message: &str) -> io::Result<()> {
        for receiver in &mut self.receivers {
            if receiver.should_log(event) {
                receiver.write(message)?;
            }
        }
        Ok(())
    }

    /// Write a message with newline
    pub fn logln(&mut self, event: LogEvent, message: &str) -> io::Result<()> {
        self.log(event, &format!("{}\n", message))
    }

    /// Write a prefixed message to every receiver listening to the event or any event above it
    /// Each receiver receives the message only once, even if it listens to multiple events
    fn log_with_prefix(&mut self, event: LogEvent, prefix: &str, message: &str) -> io::Result<()> {
        let events = event.upward();
        let formatted_message = format!("{} {}\n", prefix, message);
        for receiver in &mut self.receivers {
            let should_receive = events.iter().any(|&evt| receiver.should_log(evt));
            if should_receive {
                receiver.write(&formatted_message)?;
            }
        }
        Ok(())
    }

    /// Write a message prefixed with "ERROR" to the specified event and all upward events
    pub fn errln(&mut self, event: LogEvent, message: &str) -> io::Result<()> {
        self.log_with_prefix(event, "ERROR", message)
    }

    /// Write a message prefixed with "WARNING" to the specified event and all upward events
    pub fn warnln(&mut self, event: LogEvent, message: &str) -> io::Result<()> {
        self.log_with_prefix(event, "WARNING", message)
    }

    /// Flush all receivers
    pub fn flush(&mut self) -> io::Result<()> {
        for receiver in &mut self.receivers {
            receiver.flush()?;
        }
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}


/// Sanitize a string (e.g. an agent name) to be used as a filename
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ' ' | '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

/// Macro to log a formatted string (like println! but for logger)
#[macro_export]
macro_rules! logln {
    ($logger:expr, $event:expr, $($arg:tt)*) => {
        {
            let _ = $logger.logln($event, &format!($($arg)*));
        }
    };
}

/// Macro to log a formatted string with "ERROR" prefix to the event and all upward events
#[macro_export]
macro_rules! errln {
    ($logger:expr, $event:expr, $($arg:tt)*) => {
        {
            let _ = $logger.errln($event, &format!($($arg)*));
        }
    };
}

/// Macro to log a formatted string with "WARNING" prefix to the event and all upward events
#[macro_export]
macro_rules! warnln {
    ($logger:expr, $event:expr, $($arg:tt)*) => {
        {
            let _ = $logger.warnln($event, &format!($($arg)*));
        }
    };
}
