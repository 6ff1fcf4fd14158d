use clap::{Args, Parser, Subcommand};
use lattice_core::{ActiveSelection, Averaging, LatticeError, LatticeFamily, SystemKind};

#[derive(Parser)]
#[command(name = "lattice_cli")]
#[command(author, version, about = "Evaluate crystallographic lattice operations and print JSON reports")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Lattice family and axial ratio shared by the geometric subcommands
#[derive(Args, Debug, Clone)]
pub struct LatticeArgs {
    /// Bravais lattice family (cF, cI, hP, tI)
    #[arg(long, value_parser = parse_lattice)]
    pub lattice: LatticeFamily,

    /// Axial ratio c/a, required for hP and tI
    #[arg(long = "c-over-a")]
    pub c_over_a: Option<f64>,
}

impl LatticeArgs {
    /// Axial ratio to pass to the engine; cubic lattices ignore it
    pub fn ratio(&self) -> Result<f64, LatticeError> {
        if !self.lattice.requires_c_over_a() {
            return Ok(1.0);
        }
        self.c_over_a.ok_or_else(|| {
            LatticeError::invalid_input(
                "c_over_a",
                "<missing>",
                format!("lattice {} requires --c-over-a", self.lattice.code()),
            )
        })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the deformation systems of a lattice
    Systems {
        #[command(flatten)]
        lattice: LatticeArgs,

        /// System kind (slip, twin, trans, cleavage)
        #[arg(long, value_parser = parse_kind, default_value = "slip")]
        kind: SystemKind,

        /// Active systems per family, e.g. 12,6 (default: all)
        #[arg(long, value_parser = parse_active)]
        active: Option<ActiveSelection>,
    },

    /// Schmid, cleavage or non-Schmid projection tensors
    Schmid {
        #[command(flatten)]
        lattice: LatticeArgs,

        /// System kind (slip, twin, cleavage)
        #[arg(long, value_parser = parse_kind, default_value = "slip")]
        kind: SystemKind,

        /// Active systems per family, e.g. 12,6
        #[arg(long, value_parser = parse_active)]
        active: ActiveSelection,

        /// Slip sense (+1 or -1) for non-Schmid projections (cI slip only)
        #[arg(long, allow_hyphen_values = true)]
        sense: Option<i32>,

        /// Non-Schmid coefficients, comma-separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        coefficients: Vec<f64>,
    },

    /// Interaction matrix between two system kinds
    Interaction {
        /// Bravais lattice family (cF, cI, hP, tI)
        #[arg(long, value_parser = parse_lattice)]
        lattice: LatticeFamily,

        /// Kind of the reacting systems (rows)
        #[arg(long, value_parser = parse_kind, default_value = "slip")]
        kind: SystemKind,

        /// Kind of the acting systems (columns), defaults to --kind
        #[arg(long, value_parser = parse_kind)]
        acting: Option<SystemKind>,

        /// Active reacting systems per family
        #[arg(long, value_parser = parse_active)]
        active: ActiveSelection,

        /// Active acting systems per family, defaults to --active
        #[arg(long = "acting-active", value_parser = parse_active)]
        acting_active: Option<ActiveSelection>,

        /// Interaction coefficients indexed by interaction type, comma-separated
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        coefficients: Vec<f64>,
    },

    /// Characteristic twin shear of the active twin systems
    Shear {
        #[command(flatten)]
        lattice: LatticeArgs,

        /// Active twin systems per family
        #[arg(long, value_parser = parse_active)]
        active: ActiveSelection,
    },

    /// Voigt/Reuss equivalent moduli of a stiffness matrix
    Moduli {
        /// Stiffness as a JSON 6x6 array
        #[arg(long)]
        stiffness: String,

        /// Averaging assumption (voigt, reuss); both when omitted
        #[arg(long, value_parser = parse_averaging)]
        averaging: Option<Averaging>,

        /// Project the stiffness onto this lattice symmetry first
        #[arg(long, value_parser = parse_lattice)]
        symmetry: Option<LatticeFamily>,
    },

    /// Run the seeded consistency checks
    SelfTest {
        /// Random seed
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

impl Commands {
    /// Subcommand name used in the execution stamp
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Systems { .. } => "systems",
            Commands::Schmid { .. } => "schmid",
            Commands::Interaction { .. } => "interaction",
            Commands::Shear { .. } => "shear",
            Commands::Moduli { .. } => "moduli",
            Commands::SelfTest { .. } => "self-test",
        }
    }
}

fn parse_lattice(s: &str) -> Result<LatticeFamily, LatticeError> {
    LatticeFamily::from_str_flexible(s)
}

fn parse_kind(s: &str) -> Result<SystemKind, LatticeError> {
    SystemKind::from_str_flexible(s)
}

fn parse_active(s: &str) -> Result<ActiveSelection, LatticeError> {
    ActiveSelection::from_str_flexible(s)
}

fn parse_averaging(s: &str) -> Result<Averaging, LatticeError> {
    Averaging::from_str_flexible(s)
}
