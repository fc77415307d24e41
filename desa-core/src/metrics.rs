use serde::{Deserialize, Serialize};

/// Aggregate dashboard snapshot. The backend recomputes these; the client
/// keeps no copy beyond the current view. Fields the backend omits render as
/// zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    #[serde(default)]
    pub penduduk: u64,
    #[serde(default)]
    pub surat: u64,
    #[serde(default)]
    pub bansos: u64,
    #[serde(default)]
    pub keuangan: Keuangan,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keuangan {
    #[serde(default)]
    pub pemasukan: i64,
    #[serde(default)]
    pub pengeluaran: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_default_to_zero() {
        let metrics: DashboardMetrics = serde_json::from_str("{}").unwrap();
        assert_eq!(metrics, DashboardMetrics::default());

        let metrics: DashboardMetrics =
            serde_json::from_str(r#"{"penduduk":12,"keuangan":{"pemasukan":5000}}"#).unwrap();
        assert_eq!(metrics.penduduk, 12);
        assert_eq!(metrics.surat, 0);
        assert_eq!(metrics.keuangan.pemasukan, 5000);
        assert_eq!(metrics.keuangan.pengeluaran, 0);
    }
}
