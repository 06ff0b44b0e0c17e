use crate::filter::FilterDimension;

pub const HELP: &str = "\
Commands:
  search <text>     filter by title, description or employer
  location <text>   filter by location
  type <text>       filter by exact employment type
  clear             remove all filters
  page <n>          jump to page n
  next | prev       move one page forward or back
  show <id>         show full detail for a posting
  close             close the detail view
  facets            list locations and employment types
  reload            load the dataset again
  help              show this list
  quit | exit       leave
An empty <text> removes that filter.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Filter(FilterDimension, String),
    ClearFilters,
    Page(usize),
    Next,
    Prev,
    Show(usize),
    Close,
    Facets,
    Reload,
    Help,
    Quit,
}

fn parse_number(arg: &str, what: &str) -> Result<usize, String> {
    arg.parse::<usize>()
        .map_err(|_| format!("invalid {what} '{arg}', expected a positive integer"))
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let name = name.to_lowercase();

        if let Some(dimension) = FilterDimension::parse(&name) {
            return Ok(Some(Self::Filter(dimension, arg.to_string())));
        }
        let cmd = match name.as_str() {
            "clear" => Self::ClearFilters,
            "page" | "p" => Self::Page(parse_number(arg, "page")?),
            "next" | "n" => Self::Next,
            "prev" | "previous" => Self::Prev,
            "show" | "open" => Self::Show(parse_number(arg, "id")?),
            "close" => Self::Close,
            "facets" => Self::Facets,
            "reload" => Self::Reload,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("unknown command '{other}', type 'help' for a list")),
        };
        Ok(Some(cmd))
    }
}
