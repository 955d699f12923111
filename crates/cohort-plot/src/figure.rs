//! Explicit figure model.
//!
//! Plot builders fill a [`Figure`] and hand it back; nothing is drawn until
//! the caller passes the figure to a renderer. A figure is a grid of cells,
//! each holding at most one [`Panel`].

/// Sequential colour maps used for categorical bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Viridis,
    Plasma,
    Magma,
    Cividis,
}

impl Palette {
    pub const ALL: [Palette; 4] = [
        Palette::Viridis,
        Palette::Plasma,
        Palette::Magma,
        Palette::Cividis,
    ];

    /// Palette for the panel at `index`, cycling through [`Palette::ALL`].
    pub fn cycled(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Palette::Viridis => "viridis",
            Palette::Plasma => "plasma",
            Palette::Magma => "magma",
            Palette::Cividis => "cividis",
        }
    }

    fn stops(self) -> &'static [(u8, u8, u8); 5] {
        match self {
            Palette::Viridis => &[
                (0x44, 0x01, 0x54),
                (0x3b, 0x52, 0x8b),
                (0x21, 0x91, 0x8c),
                (0x5e, 0xc9, 0x62),
                (0xfd, 0xe7, 0x25),
            ],
            Palette::Plasma => &[
                (0x0d, 0x08, 0x87),
                (0x7e, 0x03, 0xa8),
                (0xcc, 0x47, 0x78),
                (0xf8, 0x95, 0x40),
                (0xf0, 0xf9, 0x21),
            ],
            Palette::Magma => &[
                (0x00, 0x00, 0x04),
                (0x51, 0x12, 0x7c),
                (0xb7, 0x37, 0x79),
                (0xfc, 0x89, 0x61),
                (0xfc, 0xfd, 0xbf),
            ],
            Palette::Cividis => &[
                (0x00, 0x22, 0x4e),
                (0x41, 0x4d, 0x6b),
                (0x7c, 0x7b, 0x78),
                (0xbc, 0xaf, 0x6f),
                (0xfe, 0xe8, 0x38),
            ],
        }
    }

    /// Colour of bar `index` out of `count`, spread evenly over the map.
    pub fn color(self, index: usize, count: usize) -> (u8, u8, u8) {
        let t = if count <= 1 {
            0.5
        } else {
            index.min(count - 1) as f64 / (count - 1) as f64
        };
        let stops = self.stops();
        let scaled = t * (stops.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = scaled - lower as f64;
        let (r0, g0, b0) = stops[lower];
        let (r1, g1, b1) = stops[lower + 1];
        let mix =
            |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;
        (mix(r0, r1), mix(g0, g1), mix(b0, b1))
    }
}

/// BMI (or any measure) observations for one category of a box plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGroup {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelKind {
    /// Bar per category, in the given order.
    Counts {
        categories: Vec<String>,
        counts: Vec<usize>,
        palette: Palette,
    },
    Scatter {
        points: Vec<(f64, f64)>,
        annotation: Option<String>,
    },
    BoxPlot { groups: Vec<BoxGroup> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Row-major grid cell.
    pub cell: usize,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub kind: PanelKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub rows: usize,
    pub cols: usize,
    pub panels: Vec<Panel>,
    /// Problems found while building the figure, e.g. absent columns.
    pub warnings: Vec<String>,
}

impl Figure {
    pub fn new(title: impl Into<String>, rows: usize, cols: usize) -> Self {
        Self {
            title: title.into(),
            rows,
            cols,
            panels: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// A figure with a single cell.
    pub fn single(title: impl Into<String>, panel: Panel) -> Self {
        let mut figure = Self::new(title, 1, 1);
        figure.panels.push(panel);
        figure
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn panel_at(&self, cell: usize) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.cell == cell)
    }

    /// Cells that hold no panel; renderers leave them out.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..self.cell_count())
            .filter(|&cell| self.panel_at(cell).is_none())
            .collect()
    }
}
