mod env_file;
mod parser;
mod tracing;

pub(crate) use self::tracing::init as init_tracing;
pub(crate) use env_file::load as load_env_file;
pub(crate) use parser::{Cli, Commands, CommentArgs};
