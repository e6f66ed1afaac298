use serde::{Deserialize, Serialize};
use ts_rs::TS;

fn default_id() -> i64 {
    1
}

/// Raw clinical measurements for one patient, as submitted by an entry point.
///
/// Field names on the wire are the training column names. Lab values are
/// taken as given; range checks belong to the entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawPatientRecord {
    #[serde(default = "default_id")]
    #[ts(type = "number")]
    pub id: i64,
    #[serde(rename = "N_Days")]
    #[ts(type = "number")]
    pub n_days: i64,
    #[serde(rename = "Drug")]
    pub drug: String,
    #[serde(rename = "Age")]
    #[ts(type = "number")]
    pub age: i64,
    #[serde(rename = "Sex")]
    pub sex: String,

    // Binary flags (0/1)
    #[serde(rename = "Ascites")]
    pub ascites: u8,
    #[serde(rename = "Hepatomegaly")]
    pub hepatomegaly: u8,
    #[serde(rename = "Spiders")]
    pub spiders: u8,
    #[serde(rename = "Edema")]
    pub edema: u8,

    // Lab values
    #[serde(rename = "Bilirubin")]
    pub bilirubin: f64,
    #[serde(rename = "Cholesterol")]
    pub cholesterol: f64,
    #[serde(rename = "Albumin")]
    pub albumin: f64,
    #[serde(rename = "Copper")]
    pub copper: f64,
    #[serde(rename = "Alk_Phos")]
    pub alk_phos: f64,
    #[serde(rename = "SGOT")]
    pub sgot: f64,
    #[serde(rename = "Tryglicerides")]
    pub tryglicerides: f64,
    #[serde(rename = "Platelets")]
    pub platelets: f64,
    #[serde(rename = "Prothrombin")]
    pub prothrombin: f64,

    #[serde(rename = "Stage")]
    #[ts(type = "number")]
    pub stage: i64,
}

impl RawPatientRecord {
    /// Lab values by column name, in feature-vector order.
    pub fn lab_values(&self) -> [(&'static str, f64); 9] {
        use crate::schema::column;
        [
            (column::BILIRUBIN, self.bilirubin),
            (column::CHOLESTEROL, self.cholesterol),
            (column::ALBUMIN, self.albumin),
            (column::COPPER, self.copper),
            (column::ALK_PHOS, self.alk_phos),
            (column::SGOT, self.sgot),
            (column::TRYGLICERIDES, self.tryglicerides),
            (column::PLATELETS, self.platelets),
            (column::PROTHROMBIN, self.prothrombin),
        ]
    }
}
