use crate::app::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input_path: String,
}

impl AppConfig {
    pub fn from_args() -> Result<Self, AppError> {
        Self::from_arg_list(std::env::args().skip(1))
    }

    fn from_arg_list<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        let input_path = args
            .next()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::config("expected exactly one argument: the input file path"))?;

        if args.next().is_some() {
            return Err(AppError::config(
                "expected exactly one argument: the input file path",
            ));
        }

        Ok(Self { input_path })
    }
}
