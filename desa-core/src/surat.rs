use serde::{Deserialize, Serialize};

/// Document request types offered by the village office.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JenisSurat {
    Sku,
    Domisili,
    TidakMampu,
    Lainnya,
}

impl JenisSurat {
    pub const ALL: [JenisSurat; 4] = [
        JenisSurat::Sku,
        JenisSurat::Domisili,
        JenisSurat::TidakMampu,
        JenisSurat::Lainnya,
    ];

    /// Wire name, identical to the serde representation.
    pub fn wire_name(self) -> &'static str {
        match self {
            JenisSurat::Sku => "sku",
            JenisSurat::Domisili => "domisili",
            JenisSurat::TidakMampu => "tidak_mampu",
            JenisSurat::Lainnya => "lainnya",
        }
    }

    pub fn from_wire(name: &str) -> Option<JenisSurat> {
        JenisSurat::ALL.into_iter().find(|j| j.wire_name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            JenisSurat::Sku => "SKU",
            JenisSurat::Domisili => "Domisili",
            JenisSurat::TidakMampu => "Tidak Mampu",
            JenisSurat::Lainnya => "Lainnya",
        }
    }
}

/// A document request as submitted to the backend. Write-only from the
/// client's perspective; nothing is read back.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuratRequest {
    pub pemohon_user_id: String,
    pub jenis: JenisSurat,
    pub data: serde_json::Value,
}

impl SuratRequest {
    /// A request with the free-form payload left as an empty object.
    pub fn new(pemohon_user_id: String, jenis: JenisSurat) -> Self {
        Self {
            pemohon_user_id,
            jenis,
            data: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}
