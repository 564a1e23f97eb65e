use log::LevelFilter;

pub struct Logger;

impl Logger {
    /// colog-formatted env_logger; `RUST_LOG` refines the given level
    pub fn init(level: LevelFilter) {
        let mut builder: env_logger::Builder = colog::default_builder();
        builder.filter_level(level);
        builder.parse_default_env();

        if let Err(e) = builder.try_init() {
            eprintln!("logger already initialized: {e}");
        }
    }
}
