//! Interactive scatter plot of the bundled iris samples.

use actix_web::web;

mod figure;
mod handlers;
mod iris;
mod page;

pub use figure::{scatter_figure, ColorField, Figure};
pub use iris::{load_samples, IrisSample};

const DEFAULT_TITLE: &str = "Interactive Iris Scatter Plot";

/// Samples and the default figure, built once at startup.
pub struct Dashboard {
    samples: Vec<IrisSample>,
    default_figure: Figure,
}

impl Dashboard {
    pub fn load() -> Result<Dashboard, anyhow::Error> {
        let samples = load_samples()?;
        Ok(Dashboard::from_samples(samples))
    }

    pub fn from_samples(samples: Vec<IrisSample>) -> Dashboard {
        let default_figure = scatter_figure(&samples, ColorField::Species, DEFAULT_TITLE);
        Dashboard {
            samples,
            default_figure,
        }
    }

    pub fn default_figure(&self) -> &Figure {
        &self.default_figure
    }

    pub fn figure(&self, color: ColorField) -> Figure {
        let title = format!("Scatter Plot Colored by {}", color);
        scatter_figure(&self.samples, color, &title)
    }
}

pub fn dashboard_service(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::plotly_json)
        .service(web::redirect("/dashboard", "/dashboard/"))
        .service(
            web::scope("/dashboard")
                .service(handlers::index)
                .service(handlers::figure),
        );
}
