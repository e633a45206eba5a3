mod breed;
mod breeds;
mod students;

use crate::Cli;
use crate::CommandResult;
use breed::BreedCmd;
use breeds::BreedsCmd;
use students::StudentsCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "querypad")]
pub(crate) enum CommandEnum {
    Breed(Box<BreedCmd>),
    Breeds(BreedsCmd),
    Students(StudentsCmd),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Breed(cmd) => cmd.run(cli).await,
            Self::Breeds(cmd) => cmd.run(cli).await,
            Self::Students(cmd) => cmd.run(cli).await,
        }
    }
}
