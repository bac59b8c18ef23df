use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use serde::{Deserialize, Serialize};

mod algebra;
mod color;
mod io;
mod pipeline;
mod render;

use io::png::save_png;
use pipeline::{ComplexFunction, MetricFunction, QuaternionFunction, ValueFunction};
use render::{
    render_complex, render_metric, render_quaternion, PixelBuffer, RenderParams,
    DEFAULT_COMPLEX_SCALE, DEFAULT_QUATERNION_SCALE,
};

/// Utilitaire CLI de coloration de domaine.
///
/// Exemple d'utilisation :
///   domcol-cli --mode complex --function tan --value inv-abs --output tan.png
#[derive(Parser, Debug)]
#[command(
    name = "domcol-cli",
    about = "Coloration de domaine pour fonctions complexes et quaternioniques",
    version
)]
struct Cli {
    /// Mode de rendu (complex, quaternion, metric)
    #[arg(long, default_value = "complex")]
    mode: String,

    /// Fonction à visualiser (voir --list pour le catalogue du mode)
    #[arg(long, default_value = "identity")]
    function: String,

    /// Fonction de valeur HSV en mode complexe (one, inv-abs, abs10)
    #[arg(long, default_value = "one")]
    value: String,

    /// Largeur de l'image de sortie en pixels
    #[arg(long, default_value_t = 900)]
    width: u32,

    /// Hauteur de l'image de sortie en pixels
    #[arg(long, default_value_t = 900)]
    height: u32,

    /// Étendue du plan projeté (sinon 4 en complexe, 8 en quaternion)
    #[arg(long)]
    scale: Option<f64>,

    /// Phase de luminosité en mode metric
    #[arg(long, default_value_t = 0.0)]
    phase: f64,

    /// Fichier de travail JSON (prioritaire sur les options ci-dessus)
    #[arg(long = "params", value_name = "FICHIER")]
    job: Option<PathBuf>,

    /// Affiche les fonctions disponibles du mode puis quitte
    #[arg(long)]
    list: bool,

    /// Fichier de sortie PNG
    #[arg(long, value_name = "FICHIER", default_value = "domcol.png")]
    output: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Mode {
    Complex,
    Quaternion,
    Metric,
}

impl Mode {
    fn from_cli_name(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "complex" => Some(Mode::Complex),
            "quaternion" => Some(Mode::Quaternion),
            "metric" => Some(Mode::Metric),
            _ => None,
        }
    }
}

/// Description sérialisée d'une passe de rendu, rejouable depuis un
/// fichier JSON.
#[derive(Debug, Serialize, Deserialize)]
struct RenderJob {
    mode: Mode,
    function: String,
    #[serde(default = "default_value_name")]
    value: String,
    width: u32,
    height: u32,
    #[serde(default)]
    scale: Option<f64>,
    #[serde(default)]
    phase: f64,
    output: PathBuf,
}

fn default_value_name() -> String {
    "one".to_string()
}

fn list_functions(mode: Mode) {
    match mode {
        Mode::Complex => {
            println!("Fonctions complexes :");
            for f in ComplexFunction::all() {
                println!("  {:<16} {}", f.cli_name(), f.name());
            }
            println!("Fonctions de valeur :");
            for f in ValueFunction::all() {
                println!("  {:<16} {}", f.cli_name(), f.name());
            }
        }
        Mode::Quaternion => {
            println!("Fonctions quaternioniques :");
            for f in QuaternionFunction::all() {
                println!("  {:<16} {}", f.cli_name(), f.name());
            }
        }
        Mode::Metric => {
            println!("Métriques :");
            for f in MetricFunction::all() {
                println!("  {:<20} {}", f.cli_name(), f.name());
            }
        }
    }
}

fn run(job: &RenderJob) -> Result<(), String> {
    let scale = job.scale.unwrap_or(match job.mode {
        Mode::Quaternion => DEFAULT_QUATERNION_SCALE,
        _ => DEFAULT_COMPLEX_SCALE,
    });
    let params = RenderParams {
        width: job.width,
        height: job.height,
        scale,
    };
    let mut buffer = PixelBuffer::new(job.width, job.height);

    log::info!(
        "Passe {:?} / {} ({}×{}, échelle {})",
        job.mode,
        job.function,
        job.width,
        job.height,
        scale
    );
    let start = Instant::now();
    match job.mode {
        Mode::Complex => {
            let function = ComplexFunction::from_cli_name(&job.function)
                .ok_or_else(|| format!("Fonction complexe invalide : '{}'", job.function))?;
            let value = ValueFunction::from_cli_name(&job.value)
                .ok_or_else(|| format!("Fonction de valeur invalide : '{}'", job.value))?;
            render_complex(&params, function, value, &mut buffer);
        }
        Mode::Quaternion => {
            let function = QuaternionFunction::from_cli_name(&job.function)
                .ok_or_else(|| format!("Fonction quaternionique invalide : '{}'", job.function))?;
            render_quaternion(&params, function, &mut buffer);
        }
        Mode::Metric => {
            let function = MetricFunction::from_cli_name(&job.function)
                .ok_or_else(|| format!("Métrique invalide : '{}'", job.function))?;
            render_metric(&params, function, job.phase, &mut buffer);
        }
    }
    log::info!(
        "Rendu {}×{} en {:?}",
        job.width,
        job.height,
        start.elapsed()
    );

    save_png(buffer, &job.output).map_err(|e| format!("Erreur lors de l'écriture du PNG : {e}"))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mode = match Mode::from_cli_name(&cli.mode) {
        Some(m) => m,
        None => {
            eprintln!(
                "Mode invalide : '{}'. Options : complex, quaternion, metric",
                cli.mode
            );
            std::process::exit(1);
        }
    };

    if cli.list {
        list_functions(mode);
        return;
    }

    let job = match &cli.job {
        Some(path) => {
            let contents = match std::fs::read_to_string(path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Lecture du fichier de travail impossible : {e}");
                    std::process::exit(1);
                }
            };
            match serde_json::from_str(&contents) {
                Ok(job) => job,
                Err(e) => {
                    eprintln!("Fichier de travail invalide : {e}");
                    std::process::exit(1);
                }
            }
        }
        None => RenderJob {
            mode,
            function: cli.function.clone(),
            value: cli.value.clone(),
            width: cli.width,
            height: cli.height,
            scale: cli.scale,
            phase: cli.phase,
            output: cli.output.clone(),
        },
    };

    if let Err(e) = run(&job) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
