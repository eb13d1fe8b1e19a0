//! Fixed sector-performance series and KPIs.
//!
//! # Responsibility
//! - Define the 2019-2024 GDP/agriculture growth series, the 2021-2023
//!   export-commodity turnover series and the 2023 scalar KPIs.
//! - Provide long/melted record forms ready for line and grouped-bar
//!   charting.
//!
//! # Invariants
//! - Series are returned in chronological order.
//! - Long forms enumerate year-major, metric/commodity-minor.

use serde::Serialize;

/// Commodity display order for the export turnover chart.
pub const EXPORT_COMMODITIES: [&str; 5] =
    ["Cashew", "Coffee", "Rice", "Peppercorn", "Fruit & Vegetable"];

/// One year of GDP and agriculture growth, % year-over-year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyGrowth {
    pub year: u16,
    pub gdp_growth_pct: f64,
    pub agriculture_growth_pct: f64,
}

/// One melted point of a named time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub year: u16,
    pub metric: &'static str,
    pub value: f64,
}

/// One commodity's export turnover for one year, billion USD.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommodityExport {
    pub year: u16,
    pub commodity: &'static str,
    pub turnover_billion_usd: f64,
}

/// Scalar agriculture KPIs for 2023.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorKpis {
    /// Share of national GDP contributed by agriculture, percent.
    pub agriculture_gdp_share_pct: f64,
    /// Agricultural employment, millions of workers.
    pub employment_millions: f64,
    /// Foreign direct investment into agriculture, millions of USD.
    pub fdi_millions_usd: f64,
}

const GDP_GROWTH: [(u16, f64, f64); 6] = [
    (2019, 7.36, 2.67),
    (2020, 2.87, 3.04),
    (2021, 2.55, 3.27),
    (2022, 8.12, 3.36),
    (2023, 5.05, 3.83),
    (2024, 7.0, 4.0),
];

const EXPORT_TURNOVER: [(u16, [f64; 5]); 3] = [
    (2021, [3.64, 3.07, 3.28, 0.94, 3.55]),
    (2022, [3.08, 4.06, 3.45, 0.97, 3.36]),
    (2023, [3.63, 4.18, 4.78, 0.92, 5.69]),
];

/// Returns the GDP vs agriculture growth series, 2019-2024.
pub fn gdp_growth_series() -> Vec<YearlyGrowth> {
    GDP_GROWTH
        .iter()
        .map(|(year, gdp, agri)| YearlyGrowth {
            year: *year,
            gdp_growth_pct: *gdp,
            agriculture_growth_pct: *agri,
        })
        .collect()
}

/// Returns the growth series melted to one point per year and metric.
pub fn gdp_growth_long() -> Vec<SeriesPoint> {
    let mut points = Vec::with_capacity(GDP_GROWTH.len() * 2);
    for (year, gdp, agri) in GDP_GROWTH {
        points.push(SeriesPoint {
            year,
            metric: "GDP Growth",
            value: gdp,
        });
        points.push(SeriesPoint {
            year,
            metric: "Agriculture",
            value: agri,
        });
    }
    points
}

/// Returns export turnover melted to one record per year and commodity.
pub fn export_turnover_long() -> Vec<CommodityExport> {
    let mut records = Vec::with_capacity(EXPORT_TURNOVER.len() * EXPORT_COMMODITIES.len());
    for (year, turnovers) in EXPORT_TURNOVER {
        for (commodity, turnover) in EXPORT_COMMODITIES.into_iter().zip(turnovers) {
            records.push(CommodityExport {
                year,
                commodity,
                turnover_billion_usd: turnover,
            });
        }
    }
    records
}

/// Returns the 2023 scalar agriculture KPIs.
pub fn agriculture_kpis() -> SectorKpis {
    SectorKpis {
        agriculture_gdp_share_pct: 11.96,
        employment_millions: 13.8,
        fdi_millions_usd: 61.98,
    }
}
