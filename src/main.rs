use clap::Parser;
use mppe_parser::core::ConfigProvider;
use mppe_parser::utils::error::ErrorSeverity;
use mppe_parser::utils::{logger, validation::Validate};
use mppe_parser::{
    CliConfig, EtlEngine, EtlError, LocalStorage, PayrollPipeline, TomlConfig, XlsxSheetReader,
};

async fn run<C: ConfigProvider + Validate>(config: C) -> Result<String, EtlError> {
    config.validate()?;

    let storage = LocalStorage::new(config.output_path());
    let reader = XlsxSheetReader::new(config.sheet_name());
    let pipeline = PayrollPipeline::new(storage, config, reader);

    EtlEngine::new(pipeline).run().await
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let result = match cli.config.clone() {
        Some(path) => match TomlConfig::from_file(&path) {
            Ok(toml) => run(toml).await,
            Err(e) => Err(e),
        },
        None => run(cli).await,
    };

    match result {
        Ok(output_path) => {
            println!("{}", output_path);
        }
        Err(e) => {
            tracing::error!("Payroll extraction failed: {} (severity: {:?})", e, e.severity());
            eprintln!("error: {}", e);
            eprintln!("hint: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
