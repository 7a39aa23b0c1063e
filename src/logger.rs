use log::{debug, info};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::threshold::ThresholdFilter;

const LOG_PATTERN: &str = "{d}|{f}:{L}|{l}|{m}{n}";
const LOG_FILE_SIZE: u64 = 1024 * 1024;
const LOG_FILE_BASE_INDEX: u32 = 0;
const MAX_LOG_FILE_COUNT: u32 = 2;
const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const LOG_LEVEL_DEBUG: log::LevelFilter = log::LevelFilter::Debug;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        const LOG_FILE_NAME: &str = "log/os_ident.log";
        const LOG_FILE_NAME_WHEN_ROLL: &str = "log/os_ident_{}.log";
    } else if #[cfg(windows)] {
        const LOG_FILE_NAME: &str = "log\\os_ident.log";
        const LOG_FILE_NAME_WHEN_ROLL: &str = "log\\os_ident_{}.log";
    }
}

/// Installs the global logger: console when `console_log`, otherwise a
/// size-rolled file appender.
pub fn init(console_log: bool) {
    let trigger = SizeTrigger::new(LOG_FILE_SIZE);
    let roller = FixedWindowRoller::builder()
        .base(LOG_FILE_BASE_INDEX)
        .build(LOG_FILE_NAME_WHEN_ROLL, MAX_LOG_FILE_COUNT)
        .expect("FixedWindowRoller build failed");
    let policy = CompoundPolicy::new(Box::new(trigger), Box::new(roller));
    let logfile = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(LOG_FILE_NAME, Box::new(policy))
        .expect("RollingFileAppender build failed");

    let stdout = ConsoleAppender::builder().target(Target::Stdout).build();

    let appender = if console_log {
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(LOG_LEVEL)))
            .build("logger", Box::new(stdout))
    } else {
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(LOG_LEVEL)))
            .build("logger", Box::new(logfile))
    };

    let config = Config::builder()
        .appender(appender)
        .build(Root::builder().appender("logger").build(LOG_LEVEL))
        .expect("Config build failed");

    let config_log = format!("{:?}", config);
    log4rs::init_config(config).expect("init_config failed");
    debug!("logger init success, config: {}", config_log);
}

pub fn init_test_log() {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let log_config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LOG_LEVEL_DEBUG))
        .expect("Config build failed");
    match log4rs::init_config(log_config) {
        Ok(_) => (),
        Err(why) => info!("init test log failed: {}", why),
    };
}
