use crate::error::ClientError;
use serde::{Deserialize, Serialize};

/// A population record as the backend returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Penduduk {
    #[serde(rename = "_id")]
    pub id: String,
    pub nik: String,
    pub nama: String,
    #[serde(default)]
    pub pekerjaan: Option<String>,
}

/// Creation payload. `pekerjaan` may stay empty; `nik` and `nama` are
/// required and checked before any request is issued.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewPenduduk {
    pub nik: String,
    pub nama: String,
    pub pekerjaan: String,
}

pub fn validate_new_penduduk(record: &NewPenduduk) -> Result<(), ClientError> {
    if record.nik.trim().is_empty() {
        return Err(ClientError::Validation("NIK wajib diisi".into()));
    }
    if record.nama.trim().is_empty() {
        return Err(ClientError::Validation("Nama wajib diisi".into()));
    }
    Ok(())
}
