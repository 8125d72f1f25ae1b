use clap::{ArgAction, ArgGroup, Parser};
use quick::{ColorMode, TopicAction};

#[cfg(feature = "unstable-dynamic")]
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate, ValueCompleter};

#[derive(Parser, Debug)]
#[command(name = "quick")]
#[command(version)]
#[command(about = "View, list, edit and browse quick cheat sheets")]
#[command(
    long_about = "quick - Cheat sheets in the terminal.\n\n\
    Quick files are cached per topic and subtopic and colored for the terminal.\n\
    Options in the QUICK_OPTIONS environment variable are prepended to every command.\n\n\
    Examples:\n  \
    quick git                     # View the `git` topic\n  \
    quick git:config              # View `git:config` subtopic\n  \
    quick git:                    # List `git` subtopics\n  \
    quick --edit git              # Edit or create `git` topic\n  \
    quick --edit git:config       # Edit or create `git:config` subtopic\n  \
    quick --list git              # List `git` subtopics\n  \
    quick --web git               # Open `git` topic in a website\n  \
    quick --update                # Fetch the latest quick files"
)]
#[command(group(ArgGroup::new("action").args(["edit", "list", "web", "update"])))]
pub struct Cli {
    /// Topic to show, as `topic` or `topic:subtopic`
    ///
    /// A trailing suffix picks an action without a flag:
    ///   git:      # list subtopics
    ///   git+      # edit
    ///   git/      # open in website
    #[arg(value_name = "TOPIC[:SUBTOPIC]")]
    #[cfg_attr(feature = "unstable-dynamic", arg(add = topic_completer()))]
    pub topic: Option<String>,

    /// Edit topic or subtopic (creates it if missing)
    #[arg(short = 'e', long = "edit")]
    pub edit: bool,

    /// List all quick files with topic
    ///
    /// Without a topic, lists every topic in the cache.
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Open quick file in website
    #[arg(short = 'w', long = "web")]
    pub web: bool,

    /// Clone or pull the quick file repository into the cache
    #[arg(short = 'u', long = "update")]
    pub update: bool,

    /// Force color printing
    #[arg(long = "color", conflicts_with = "nocolor")]
    pub color: bool,

    /// Force no color printing
    #[arg(long = "nocolor")]
    pub nocolor: bool,

    /// Increase log output on stderr (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Action chosen by flag, overriding any topic suffix
    pub fn action(&self) -> Option<TopicAction> {
        if self.edit {
            Some(TopicAction::Edit)
        } else if self.list {
            Some(TopicAction::List)
        } else if self.web {
            Some(TopicAction::Web)
        } else {
            None
        }
    }

    pub fn color_flag(&self) -> Option<ColorMode> {
        ColorMode::from_flags(self.color, self.nocolor)
    }
}

#[cfg(feature = "unstable-dynamic")]
fn topic_completer() -> ArgValueCompleter {
    use std::ffi::OsStr;

    struct TopicCompleter;

    impl ValueCompleter for TopicCompleter {
        fn complete(&self, current: &OsStr) -> Vec<CompletionCandidate> {
            let input = current.to_string_lossy();
            let cache = quick::Config::load().cache();

            // "git:co" completes subtopics of git, anything else completes topics
            let names = match input.split_once(':') {
                Some((topic, _)) => cache.list(Some(topic)),
                None => cache.list(None),
            };

            names
                .unwrap_or_default()
                .into_iter()
                .filter(|name| name.starts_with(&*input))
                .map(CompletionCandidate::new)
                .collect()
        }
    }

    ArgValueCompleter::new(TopicCompleter)
}
