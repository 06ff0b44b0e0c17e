use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "jobboard",
    version,
    about = "browse, filter and page through job-posting datasets",
    long_about = "Jobboard loads a CSV of job postings and lets you filter it by free text, location and employment type, five postings per page.\n\nExamples:\n  jobboard --source ./job_postings_dataset.csv\n  jobboard -q rust -l remote -p 2\n  jobboard -e Full-time --output-format json -o jobs.json\n  jobboard --interactive\n\nTip: Use --config to keep the dataset location and default filters in one place."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase log verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 's',
        long = "source",
        visible_alias = "dataset",
        value_name = "PATH|URL",
        help_heading = "Input",
        help = "CSV dataset to load (defaults to ./job_postings_dataset.csv)."
    )]
    pub source: Option<String>,

    #[arg(
        short = 'C',
        long = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.jobboard/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "init-config",
        help_heading = "Input",
        help = "Write a starter config file (to --config or the default path) and exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 'q',
        long = "search",
        value_name = "TEXT",
        help_heading = "Filters",
        help = "Match text in title, description or employer (case-insensitive)."
    )]
    pub search: Option<String>,

    #[arg(
        short = 'l',
        long = "location",
        value_name = "TEXT",
        help_heading = "Filters",
        help = "Match text in the location (case-insensitive)."
    )]
    pub location: Option<String>,

    #[arg(
        short = 'e',
        long = "employment-type",
        visible_alias = "type",
        value_name = "TYPE",
        help_heading = "Filters",
        help = "Exact employment type, ignoring case (e.g. Full-time)."
    )]
    pub employment_type: Option<String>,

    #[arg(
        short = 'p',
        long = "page",
        value_name = "N",
        help_heading = "Navigation",
        help = "Page to show (1-based)."
    )]
    pub page: Option<usize>,

    #[arg(
        short = 'S',
        long = "show",
        value_name = "ID",
        help_heading = "Navigation",
        help = "Show full detail for the posting with this id."
    )]
    pub show: Option<usize>,

    #[arg(
        short = 'F',
        long = "facets",
        help_heading = "Navigation",
        help = "List the available locations and employment types."
    )]
    pub facets: bool,

    #[arg(
        short = 'I',
        long = "interactive",
        help_heading = "Navigation",
        help = "Read browse commands from stdin (type 'help' for the list)."
    )]
    pub interactive: bool,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write the rendered view to a file."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'A',
        long = "output-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format (text or json)."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'n',
        long = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,
}
