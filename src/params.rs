//! Integration parameters and their command line surface
//!
//! The original program hardwired a = 0, b = 1, n = 1024; here the
//! defaults are explicit configuration. Parsing and validation happen
//! once, on the coordinator rank, before the parameters are broadcast,
//! so the workers never see invalid values.
use thiserror::Error;

/// Default left endpoint
pub const DEFAULT_A: f64 = 0.0;
/// Default right endpoint
pub const DEFAULT_B: f64 = 1.0;
/// Default number of trapezoids
pub const DEFAULT_N: u64 = 1024;

/// Parameters of one definite integral, shared by all ranks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationParams {
    /// Left endpoint
    pub a: f64,
    /// Right endpoint
    pub b: f64,
    /// Number of trapezoids, n > 0
    pub n: u64,
}

impl Default for IntegrationParams {
    fn default() -> Self {
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
            n: DEFAULT_N,
        }
    }
}

/// Rejected command line input. Every variant maps to the same
/// whole-group abort with status 1 in the driver.
#[derive(Error, Debug, PartialEq)]
pub enum ParamsError {
    /// The trapezoid count must be at least 1
    #[error("n must be positive, got {0}")]
    NonPositiveSubintervals(i64),

    /// An argument did not parse as a number
    #[error("invalid value for {name}: {value:?}")]
    InvalidArgument {
        /// Which positional argument
        name: &'static str,
        /// The offending token
        value: String,
    },

    /// Expected zero or three positional arguments
    #[error("expected `<a> <b> <n>` or no arguments, got {0} argument(s)")]
    WrongArgumentCount(usize),
}

impl IntegrationParams {
    /// Build parameters from the positional arguments `<a> <b> <n>`
    /// (program name already stripped). No arguments selects the
    /// defaults.
    pub fn from_args(args: &[String]) -> Result<Self, ParamsError> {
        match args.len() {
            0 => Ok(Self::default()),
            3 => {
                let a = parse_arg::<f64>("a", &args[0])?;
                let b = parse_arg::<f64>("b", &args[1])?;
                let n = parse_arg::<i64>("n", &args[2])?;
                if n <= 0 {
                    return Err(ParamsError::NonPositiveSubintervals(n));
                }
                Ok(Self { a, b, n: n as u64 })
            }
            count => Err(ParamsError::WrongArgumentCount(count)),
        }
    }
}

fn parse_arg<T: std::str::FromStr>(
    name: &'static str,
    value: &str,
) -> Result<T, ParamsError> {
    value.parse().map_err(|_| ParamsError::InvalidArgument {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn no_arguments_selects_defaults() {
        let params = IntegrationParams::from_args(&[]).unwrap();
        assert_eq!(params, IntegrationParams::default());
        assert_eq!(params.a, 0.0);
        assert_eq!(params.b, 1.0);
        assert_eq!(params.n, 1024);
    }

    #[test]
    fn three_arguments_parse_positionally() {
        let params = IntegrationParams::from_args(&args(&["-1.5", "2.5", "64"])).unwrap();
        assert_eq!(
            params,
            IntegrationParams {
                a: -1.5,
                b: 2.5,
                n: 64
            }
        );
    }

    #[test]
    fn zero_trapezoids_is_rejected() {
        let err = IntegrationParams::from_args(&args(&["0.0", "1.0", "0"])).unwrap_err();
        assert_eq!(err, ParamsError::NonPositiveSubintervals(0));
    }

    #[test]
    fn negative_trapezoids_is_rejected() {
        let err = IntegrationParams::from_args(&args(&["0.0", "1.0", "-5"])).unwrap_err();
        assert_eq!(err, ParamsError::NonPositiveSubintervals(-5));
    }

    #[test]
    fn junk_argument_is_rejected() {
        let err = IntegrationParams::from_args(&args(&["0.0", "one", "8"])).unwrap_err();
        assert_eq!(
            err,
            ParamsError::InvalidArgument {
                name: "b",
                value: "one".to_string()
            }
        );
    }

    #[test]
    fn fractional_n_is_rejected() {
        let err = IntegrationParams::from_args(&args(&["0.0", "1.0", "8.5"])).unwrap_err();
        assert!(matches!(err, ParamsError::InvalidArgument { name: "n", .. }));
    }

    #[test]
    fn partial_argument_list_is_rejected() {
        let err = IntegrationParams::from_args(&args(&["0.0"])).unwrap_err();
        assert_eq!(err, ParamsError::WrongArgumentCount(1));
    }
}
