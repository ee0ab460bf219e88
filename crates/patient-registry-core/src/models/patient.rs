//! Patient models.

use serde::{Deserialize, Serialize};

use super::validation::{FieldError, ValidationErrors};

/// Patient gender, closed set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Others,
}

/// The stored attributes of a patient. The patient id is the key of the
/// store mapping and never appears inside the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    /// Patient name
    pub name: String,
    /// City of residence
    pub city: String,
    /// Age in years, 1..=119
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height in meters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
}

/// Weight-class verdict derived from BMI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Verdict {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Verdict {
    /// Classify a BMI value against the standard thresholds.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Verdict::Underweight
        } else if bmi < 25.0 {
            Verdict::Normal
        } else if bmi < 30.0 {
            Verdict::Overweight
        } else {
            Verdict::Obese
        }
    }
}

impl PatientRecord {
    /// Body mass index, rounded to two decimal places. Computed on read,
    /// never persisted.
    pub fn bmi(&self) -> f64 {
        (self.weight / (self.height * self.height) * 100.0).round() / 100.0
    }

    /// Weight-class verdict derived from the current BMI.
    pub fn verdict(&self) -> Verdict {
        Verdict::from_bmi(self.bmi())
    }

    /// Check field constraints, collecting every violation.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        collect_field_errors(self, &mut errors);
        errors.into_result()
    }
}

fn collect_field_errors(record: &PatientRecord, errors: &mut ValidationErrors) {
    if record.name.is_empty() {
        errors.push(FieldError::new("name", "must be a non-empty string"));
    }
    if record.city.is_empty() {
        errors.push(FieldError::new("city", "must be a non-empty string"));
    }
    if !(1..=119).contains(&record.age) {
        errors.push(FieldError::new("age", "must be between 1 and 119"));
    }
    if !(record.height.is_finite() && record.height > 0.0) {
        errors.push(FieldError::new("height", "must be a positive number"));
    }
    if !(record.weight.is_finite() && record.weight > 0.0) {
        errors.push(FieldError::new("weight", "must be a positive number"));
    }
}

/// Creation payload: a full patient including its id.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewPatient {
    pub id: String,
    pub name: String,
    pub city: String,
    pub age: u32,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
}

impl NewPatient {
    /// Split into the store key and the stored record, validating first.
    pub fn into_parts(self) -> Result<(String, PatientRecord), ValidationErrors> {
        let record = PatientRecord {
            name: self.name,
            city: self.city,
            age: self.age,
            gender: self.gender,
            height: self.height,
            weight: self.weight,
        };
        let mut errors = ValidationErrors::new();
        if self.id.is_empty() {
            errors.push(FieldError::new("id", "must be a non-empty string"));
        }
        collect_field_errors(&record, &mut errors);
        errors.into_result()?;
        Ok((self.id, record))
    }
}

/// Partial-update payload: every mutable field optional. Only present
/// fields overwrite the existing record; `null` counts as absent.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub city: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

impl PatientUpdate {
    /// Overlay the present fields onto an existing record. The caller
    /// revalidates the merged record before persisting it.
    pub fn apply_to(&self, record: &mut PatientRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(city) = &self.city {
            record.city = city.clone();
        }
        if let Some(age) = self.age {
            record.age = age;
        }
        if let Some(gender) = self.gender {
            record.gender = gender;
        }
        if let Some(height) = self.height {
            record.height = height;
        }
        if let Some(weight) = self.weight {
            record.weight = weight;
        }
    }

    /// True when no field is present (the update is a no-op overlay).
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.city.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.height.is_none()
            && self.weight.is_none()
    }
}

/// Response shape: the stored fields plus the derived metrics.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PatientView {
    pub name: String,
    pub city: String,
    pub age: u32,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub verdict: Verdict,
}

impl From<&PatientRecord> for PatientView {
    fn from(record: &PatientRecord) -> Self {
        Self {
            name: record.name.clone(),
            city: record.city.clone(),
            age: record.age,
            gender: record.gender,
            height: record.height,
            weight: record.weight,
            bmi: record.bmi(),
            verdict: record.verdict(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PatientRecord {
        PatientRecord {
            name: "Ananya".into(),
            city: "Pune".into(),
            age: 28,
            gender: Gender::Female,
            height: 1.75,
            weight: 70.5,
        }
    }

    #[test]
    fn test_bmi_rounds_to_two_decimals() {
        let record = sample_record();
        assert_eq!(record.bmi(), 23.02);
        assert_eq!(record.verdict(), Verdict::Normal);
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(Verdict::from_bmi(18.49), Verdict::Underweight);
        assert_eq!(Verdict::from_bmi(18.5), Verdict::Normal);
        assert_eq!(Verdict::from_bmi(24.99), Verdict::Normal);
        assert_eq!(Verdict::from_bmi(25.0), Verdict::Overweight);
        assert_eq!(Verdict::from_bmi(29.99), Verdict::Overweight);
        assert_eq!(Verdict::from_bmi(30.0), Verdict::Obese);
    }

    #[test]
    fn test_validate_collects_all_violations() {
        let record = PatientRecord {
            name: String::new(),
            city: String::new(),
            age: 0,
            gender: Gender::Male,
            height: 0.0,
            weight: -5.0,
        };
        let errors = record.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "city", "age", "height", "weight"]);
    }

    #[test]
    fn test_validate_age_bounds() {
        let mut record = sample_record();
        record.age = 119;
        assert!(record.validate().is_ok());
        record.age = 120;
        assert!(record.validate().is_err());
        record.age = 1;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_new_patient_requires_id() {
        let patient = NewPatient {
            id: String::new(),
            name: "Ravi".into(),
            city: "Delhi".into(),
            age: 40,
            gender: Gender::Male,
            height: 1.7,
            weight: 80.0,
        };
        let errors = patient.into_parts().unwrap_err();
        assert_eq!(errors.iter().next().unwrap().field, "id");
    }

    #[test]
    fn test_update_overlays_present_fields_only() {
        let mut record = sample_record();
        let update = PatientUpdate {
            weight: Some(90.0),
            ..Default::default()
        };
        update.apply_to(&mut record);
        assert_eq!(record.weight, 90.0);
        assert_eq!(record.name, "Ananya");
        assert_eq!(record.height, 1.75);
        assert_eq!(record.verdict(), Verdict::Overweight);
    }

    #[test]
    fn test_update_null_fields_count_as_absent() {
        let update: PatientUpdate =
            serde_json::from_str(r#"{"name": null, "age": 30}"#).unwrap();
        assert_eq!(update.name, None);
        assert_eq!(update.age, Some(30));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_gender_wire_format() {
        assert_eq!(serde_json::to_string(&Gender::Others).unwrap(), r#""others""#);
        let gender: Result<Gender, _> = serde_json::from_str(r#""unknown""#);
        assert!(gender.is_err());
    }

    #[test]
    fn test_view_includes_derived_fields() {
        let view = PatientView::from(&sample_record());
        assert_eq!(view.bmi, 23.02);
        assert_eq!(view.verdict, Verdict::Normal);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["verdict"], "Normal");
        assert_eq!(json["gender"], "female");
    }
}
