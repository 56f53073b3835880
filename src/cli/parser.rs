use clap::{Parser, Subcommand};

/// Command-line interface definition for rreserve
#[derive(Parser)]
#[command(
    name = "rreserve",
    version = env!("CARGO_PKG_VERSION"),
    about = "Book a restaurant table step by step: details, location, price, cuisine, ambience, restaurant, table, confirmation and rating",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Session id; independent reservations use different ids
    #[arg(global = true, long = "session", default_value = "default")]
    pub session: String,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Print the internal journal
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Start a new booking (clears the current session)
    Start,

    /// Enter your details; without flags shows the form
    User {
        #[arg(long)]
        name: Option<String>,

        /// 10 digit phone number
        #[arg(long)]
        phone: Option<String>,

        /// Reservation date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Party size (1-50)
        #[arg(long, allow_hyphen_values = true)]
        people: Option<String>,

        /// Preferred time slot
        #[arg(long)]
        time: Option<String>,
    },

    /// Pick a location; without a value lists the choices
    Location { value: Option<String> },

    /// Pick a price range; without a value lists the choices
    Pricerange { value: Option<String> },

    /// Pick a cuisine; without a value lists the choices
    Cuisine { value: Option<String> },

    /// Pick an ambience; without a value lists the choices
    Ambience { value: Option<String> },

    /// Pick a restaurant; without a value lists the choices
    Restaurant { value: Option<String> },

    /// Pick a table number (1-15)
    Table {
        #[arg(allow_hyphen_values = true)]
        number: Option<String>,
    },

    /// Review the booking; --yes confirms it
    Confirm {
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Rate your visit (0-5) and leave feedback
    Rate {
        #[arg(long, allow_hyphen_values = true)]
        rating: Option<String>,

        #[arg(long)]
        feedback: Option<String>,
    },

    /// Show the booking stored in the current session
    Status,
}
