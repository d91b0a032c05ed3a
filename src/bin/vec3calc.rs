//! Vector Calculator
//!
//! Evaluates a single vector operation from the command line. Vectors are
//! written in the same `(x,y,z)` form the library prints.
//!
//! Usage:
//!   cargo run --bin vec3calc -- cross "(1,0,0)" "(0,1,0)"
//!   cargo run --bin vec3calc -- angle "(1,0,0)" "(1,1,0)" --degrees

use clap::{ArgAction, Parser, Subcommand};
use vector3d::constants::RAD2DEG;
use vector3d::Vector3;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Vector Calculator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Evaluates 3D vector operations on vectors written as (x,y,z)",
    long_about = None
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

/// Vector arguments may start with `-` when written without parentheses
#[derive(Subcommand, Debug)]
enum Command {
    /// Euclidean length of a vector
    Magnitude {
        #[arg(allow_hyphen_values = true)]
        v: Vector3,
    },
    /// Unit vector in the same direction (zero vector is returned unchanged)
    Normalize {
        #[arg(allow_hyphen_values = true)]
        v: Vector3,
    },
    /// Dot product of two vectors
    Dot {
        #[arg(allow_hyphen_values = true)]
        a: Vector3,
        #[arg(allow_hyphen_values = true)]
        b: Vector3,
    },
    /// Right-handed cross product a × b
    Cross {
        #[arg(allow_hyphen_values = true)]
        a: Vector3,
        #[arg(allow_hyphen_values = true)]
        b: Vector3,
    },
    /// Distance between two points
    Distance {
        #[arg(allow_hyphen_values = true)]
        a: Vector3,
        #[arg(allow_hyphen_values = true)]
        b: Vector3,
    },
    /// Angle between two vectors
    Angle {
        #[arg(allow_hyphen_values = true)]
        a: Vector3,
        #[arg(allow_hyphen_values = true)]
        b: Vector3,
        /// Report the angle in degrees instead of radians
        #[arg(short, long, action = ArgAction::SetTrue)]
        degrees: bool,
    },
    /// Linear interpolation from a (t = 0) to b (t = 1)
    Interpolate {
        #[arg(allow_hyphen_values = true)]
        a: Vector3,
        #[arg(allow_hyphen_values = true)]
        b: Vector3,
        #[arg(allow_hyphen_values = true)]
        t: f64,
    },
}

/// Runs one command and renders its result
fn evaluate(command: &Command) -> String {
    match command {
        Command::Magnitude { v } => v.magnitude().to_string(),
        Command::Normalize { v } => {
            let mut unit = *v;
            unit.normalize();
            unit.to_string()
        }
        Command::Dot { a, b } => a.dot(b).to_string(),
        Command::Cross { a, b } => (*a * *b).to_string(),
        Command::Distance { a, b } => a.distance(b).to_string(),
        Command::Angle { a, b, degrees } => {
            let radians = a.angle(b);
            if *degrees {
                (radians * RAD2DEG).to_string()
            } else {
                radians.to_string()
            }
        }
        Command::Interpolate { a, b, t } => a.interpolate(b, *t).to_string(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    println!("{}", evaluate(&args.command));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(argv: &[&str]) -> String {
        let args = Args::try_parse_from(argv.iter().copied()).unwrap();
        evaluate(&args.command)
    }

    #[test]
    fn test_cross_command() {
        assert_eq!(run(&["vec3calc", "cross", "(1,0,0)", "(0,1,0)"]), "(0,0,1)");
    }

    #[test]
    fn test_angle_in_degrees() {
        let out = run(&["vec3calc", "angle", "(1,0,0)", "(0,1,0)", "--degrees"]);
        assert_eq!(out.parse::<f64>().unwrap(), 90.0);
    }

    #[test]
    fn test_interpolate_negative_t() {
        assert_eq!(
            run(&["vec3calc", "interpolate", "(0,0,0)", "(2,2,2)", "-1"]),
            "(-2,-2,-2)"
        );
    }

    #[test]
    fn test_unparenthesized_negative_vectors() {
        assert_eq!(run(&["vec3calc", "magnitude", "-3,4,0"]), "5");
        assert_eq!(run(&["vec3calc", "dot", "-1,0,0", "-2,5,0"]), "2");
        assert_eq!(run(&["vec3calc", "normalize", "-4,0,0"]), "(-1,0,0)");
    }

    #[test]
    fn test_rejects_malformed_vector() {
        assert!(Args::try_parse_from(["vec3calc", "magnitude", "(1,2)"]).is_err());
    }
}
