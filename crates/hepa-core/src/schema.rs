/// Column names of the feature vector, as the scorer was trained on them.
pub mod column {
    pub const ID: &str = "id";
    pub const N_DAYS: &str = "N_Days";
    pub const DRUG: &str = "Drug";
    pub const AGE: &str = "Age";
    pub const SEX: &str = "Sex";
    pub const ASCITES: &str = "Ascites";
    pub const HEPATOMEGALY: &str = "Hepatomegaly";
    pub const SPIDERS: &str = "Spiders";
    pub const EDEMA: &str = "Edema";
    pub const BILIRUBIN: &str = "Bilirubin";
    pub const CHOLESTEROL: &str = "Cholesterol";
    pub const ALBUMIN: &str = "Albumin";
    pub const COPPER: &str = "Copper";
    pub const ALK_PHOS: &str = "Alk_Phos";
    pub const SGOT: &str = "SGOT";
    pub const TRYGLICERIDES: &str = "Tryglicerides";
    pub const PLATELETS: &str = "Platelets";
    pub const PROTHROMBIN: &str = "Prothrombin";
    pub const STAGE: &str = "Stage";

    // Engineered block
    pub const BILI_ALB: &str = "Bili_Alb";
    pub const AGE_STAGE: &str = "Age_Stage";
    pub const PROTHROMBIN_PLATELETS_RATIO: &str = "Prothrombin_Platelets_Ratio";
    pub const AGE_BIN: &str = "Age_bin";
    pub const STAGE_GROUPED: &str = "Stage_grouped";
    pub const BILIRUBIN_LOG: &str = "Bilirubin_log";
    pub const CHOLESTEROL_LOG: &str = "Cholesterol_log";
    pub const SGOT_LOG: &str = "SGOT_log";
    pub const BILIRUBIN_BIN_1: &str = "Bilirubin_bin_1";
    pub const BILIRUBIN_BIN_2: &str = "Bilirubin_bin_2";
}

pub const FEATURE_COUNT: usize = 29;

/// The column order of the feature vector handed to the scorer.
///
/// Position is load-bearing: the scorer reads features by index, so this
/// must match the training column order exactly.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    column::ID,
    column::N_DAYS,
    column::DRUG,
    column::AGE,
    column::SEX,
    column::ASCITES,
    column::HEPATOMEGALY,
    column::SPIDERS,
    column::EDEMA,
    column::BILIRUBIN,
    column::CHOLESTEROL,
    column::ALBUMIN,
    column::COPPER,
    column::ALK_PHOS,
    column::SGOT,
    column::TRYGLICERIDES,
    column::PLATELETS,
    column::PROTHROMBIN,
    column::STAGE,
    column::BILI_ALB,
    column::AGE_STAGE,
    column::PROTHROMBIN_PLATELETS_RATIO,
    column::AGE_BIN,
    column::STAGE_GROUPED,
    column::BILIRUBIN_LOG,
    column::CHOLESTEROL_LOG,
    column::SGOT_LOG,
    column::BILIRUBIN_BIN_1,
    column::BILIRUBIN_BIN_2,
];

/// Position of a column in [`FEATURE_COLUMNS`].
pub fn column_index(name: &str) -> Option<usize> {
    FEATURE_COLUMNS.iter().position(|c| *c == name)
}
