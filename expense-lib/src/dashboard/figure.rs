//! Plotly figure documents.
//!
//! Only the parts of the figure schema the dashboard uses are modelled. The browser hands
//! `data` and `layout` straight to `Plotly.react`.

use super::iris::IrisSample;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const MAX_MARKER_SIZE: f64 = 20.0;

const QUALITATIVE_COLORS: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

const PLASMA: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

/// Field driving the marker colour.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ColorField {
    Species,
    PetalLength,
    PetalWidth,
}

impl ColorField {
    pub const ALL: [ColorField; 3] = [
        ColorField::Species,
        ColorField::PetalLength,
        ColorField::PetalWidth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorField::Species => "species",
            ColorField::PetalLength => "petal_length",
            ColorField::PetalWidth => "petal_width",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorField::Species => "Species",
            ColorField::PetalLength => "Petal Length",
            ColorField::PetalWidth => "Petal Width",
        }
    }

    fn value(&self, sample: &IrisSample) -> Option<f64> {
        match self {
            ColorField::Species => None,
            ColorField::PetalLength => Some(sample.petal_length),
            ColorField::PetalWidth => Some(sample.petal_width),
        }
    }
}

impl Display for ColorField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Figure {
    pub data: Vec<ScatterTrace>,
    pub layout: Layout,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ScatterTrace {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub showlegend: bool,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub marker: Marker,
    pub customdata: Vec<[f64; 1]>,
    pub hovertemplate: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Marker {
    pub color: MarkerColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coloraxis: Option<String>,
    pub size: Vec<f64>,
    pub sizemode: String,
    pub sizeref: f64,
    pub symbol: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(untagged)]
pub enum MarkerColor {
    Solid(String),
    Scale(Vec<f64>),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: impl Into<String>) -> Title {
        Title { text: text.into() }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Axis {
    pub title: Title,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Legend {
    pub title: Title,
    pub itemsizing: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ColorAxis {
    pub colorbar: ColorBar,
    pub colorscale: Vec<(f64, String)>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coloraxis: Option<ColorAxis>,
}

/// Scatter of sepal width against sepal length. Marker area follows petal length, hover shows
/// petal width, and `color` picks the colouring field.
pub fn scatter_figure(samples: &[IrisSample], color: ColorField, title: &str) -> Figure {
    let max_petal_length = samples
        .iter()
        .map(|s| s.petal_length)
        .fold(0.0_f64, f64::max);
    let sizeref = if max_petal_length > 0.0 {
        2.0 * max_petal_length / (MAX_MARKER_SIZE * MAX_MARKER_SIZE)
    } else {
        1.0
    };

    let layout = Layout {
        title: Title::new(title),
        xaxis: Axis {
            title: Title::new("sepal_width"),
        },
        yaxis: Axis {
            title: Title::new("sepal_length"),
        },
        legend: None,
        coloraxis: None,
    };

    match color {
        ColorField::Species => {
            let mut species: Vec<&str> = Vec::new();
            for sample in samples {
                if !species.contains(&sample.species.as_str()) {
                    species.push(&sample.species);
                }
            }

            let data = species
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let group: Vec<&IrisSample> =
                        samples.iter().filter(|s| s.species == *name).collect();
                    let marker_color = QUALITATIVE_COLORS[i % QUALITATIVE_COLORS.len()];
                    build_trace(
                        &group,
                        Some(name.to_string()),
                        MarkerColor::Solid(marker_color.to_owned()),
                        None,
                        sizeref,
                        format!("species={}<br>", name),
                    )
                })
                .collect();

            Figure {
                data,
                layout: Layout {
                    legend: Some(Legend {
                        title: Title::new("species"),
                        itemsizing: "constant".to_owned(),
                    }),
                    ..layout
                },
            }
        }
        ColorField::PetalLength | ColorField::PetalWidth => {
            let group: Vec<&IrisSample> = samples.iter().collect();
            let values = samples.iter().filter_map(|s| color.value(s)).collect();
            let trace = build_trace(
                &group,
                None,
                MarkerColor::Scale(values),
                Some("coloraxis".to_owned()),
                sizeref,
                String::new(),
            );
            let colorscale = PLASMA
                .iter()
                .enumerate()
                .map(|(i, c)| (i as f64 / (PLASMA.len() - 1) as f64, (*c).to_owned()))
                .collect();

            Figure {
                data: vec![ScatterTrace {
                    hovertemplate: trace.hovertemplate.replace(
                        "<extra></extra>",
                        &format!("<br>{}=%{{marker.color}}<extra></extra>", color),
                    ),
                    ..trace
                }],
                layout: Layout {
                    coloraxis: Some(ColorAxis {
                        colorbar: ColorBar {
                            title: Title::new(color.as_str()),
                        },
                        colorscale,
                    }),
                    ..layout
                },
            }
        }
    }
}

fn build_trace(
    samples: &[&IrisSample],
    name: Option<String>,
    color: MarkerColor,
    coloraxis: Option<String>,
    sizeref: f64,
    hover_prefix: String,
) -> ScatterTrace {
    ScatterTrace {
        trace_type: "scatter".to_owned(),
        mode: "markers".to_owned(),
        showlegend: name.is_some(),
        name,
        x: samples.iter().map(|s| s.sepal_width).collect(),
        y: samples.iter().map(|s| s.sepal_length).collect(),
        marker: Marker {
            color,
            coloraxis,
            size: samples.iter().map(|s| s.petal_length).collect(),
            sizemode: "area".to_owned(),
            sizeref,
            symbol: "circle".to_owned(),
        },
        customdata: samples.iter().map(|s| [s.petal_width]).collect(),
        hovertemplate: format!(
            "{}sepal_width=%{{x}}<br>sepal_length=%{{y}}<br>petal_length=%{{marker.size}}<br>petal_width=%{{customdata[0]}}<extra></extra>",
            hover_prefix
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{scatter_figure, ColorField, MarkerColor};
    use crate::dashboard::iris::IrisSample;

    fn sample(species: &str, petal_length: f64) -> IrisSample {
        IrisSample {
            sepal_length: 5.0,
            sepal_width: 3.0,
            petal_length,
            petal_width: 0.4,
            species: species.to_owned(),
        }
    }

    #[test]
    fn species_gets_a_trace_each() {
        let samples = vec![
            sample("setosa", 1.4),
            sample("virginica", 6.0),
            sample("setosa", 1.5),
        ];

        let figure = scatter_figure(&samples, ColorField::Species, "Iris");
        let names: Vec<Option<String>> = figure.data.iter().map(|t| t.name.clone()).collect();
        assert_eq!(
            vec![Some("setosa".to_owned()), Some("virginica".to_owned())],
            names
        );
        assert_eq!(vec![1.4, 1.5], figure.data[0].marker.size);
        assert!(figure.layout.legend.is_some());
        assert!(figure.layout.coloraxis.is_none());
    }

    #[test]
    fn numeric_field_uses_color_axis() {
        let samples = vec![sample("setosa", 1.4), sample("virginica", 6.0)];

        let figure = scatter_figure(&samples, ColorField::PetalLength, "By length");
        assert_eq!(1, figure.data.len());
        assert_eq!(MarkerColor::Scale(vec![1.4, 6.0]), figure.data[0].marker.color);
        assert_eq!(
            Some("coloraxis".to_owned()),
            figure.data[0].marker.coloraxis
        );

        let coloraxis = figure.layout.coloraxis.unwrap();
        assert_eq!("petal_length", coloraxis.colorbar.title.text);
        assert_eq!(Some(&(0.0, "#0d0887".to_owned())), coloraxis.colorscale.first());
        assert_eq!(Some(&(1.0, "#f0f921".to_owned())), coloraxis.colorscale.last());
    }

    #[test]
    fn marker_area_scales_to_largest_petal() {
        let samples = vec![sample("setosa", 1.0), sample("virginica", 8.0)];

        let figure = scatter_figure(&samples, ColorField::PetalWidth, "");
        assert_eq!(2.0 * 8.0 / 400.0, figure.data[0].marker.sizeref);
    }

    #[test]
    fn color_field_wire_names() {
        for field in ColorField::ALL {
            let json = serde_json::to_value(field).unwrap();
            assert_eq!(field.as_str(), json.as_str().unwrap());
        }
    }
}
