use std::error::Error;

use log::info;

use crate::controllers::render::RenderController;
use crate::core::fractals::render_config::RenderConfig;
use crate::input::cli::args::CliArgs;
use crate::presenters::file::factory::file_presenter_factory;

pub struct RunCliCommand {
    args: CliArgs,
}

impl RunCliCommand {
    #[must_use]
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let config = RenderConfig::try_from(&self.args)?;
        let presenter = file_presenter_factory(&self.args.output);
        let mut controller = RenderController::new(config, presenter);

        controller.generate()?;

        if self.args.verbose {
            if let Some(statistics) = controller.statistics() {
                println!("{}", statistics);
            }
        }

        if self.args.debug {
            info!("Debug run, not saving {}", self.args.output.display());
            return Ok(());
        }

        controller.write(&self.args.output)?;

        Ok(())
    }
}
