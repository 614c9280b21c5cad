use crate::query::QueryParams;

/// A checkbox bound to a boolean query parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BooleanField {
    pub name: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

impl BooleanField {
    pub fn id(&self) -> String {
        format!("id_{}", self.name)
    }
}

/// Visibility filters for the image listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFilterForm {
    pub calibrated: BooleanField,
    pub processing: BooleanField,
    pub failed: BooleanField,
}

impl Default for ImageFilterForm {
    /// Unbound form: only calibrated images are shown.
    fn default() -> Self {
        Self::with_values(true, false, false)
    }
}

impl ImageFilterForm {
    pub fn with_values(calibrated: bool, processing: bool, failed: bool) -> Self {
        Self {
            calibrated: BooleanField {
                name: "calibrated",
                label: "Calibrated",
                checked: calibrated,
            },
            processing: BooleanField {
                name: "processing",
                label: "Processing",
                checked: processing,
            },
            failed: BooleanField {
                name: "failed",
                label: "Failed",
                checked: failed,
            },
        }
    }

    /// Bind from the request query. When none of the filter keys is present
    /// the form falls back to its initial values.
    pub fn from_query(query: &QueryParams) -> Self {
        let names = ["calibrated", "processing", "failed"];
        if !names.iter().any(|name| query.contains(name)) {
            return Self::default();
        }
        let on = |name: &str| query.get(name).is_some_and(is_truthy);
        Self::with_values(on("calibrated"), on("processing"), on("failed"))
    }

    pub fn fields(&self) -> [&BooleanField; 3] {
        [&self.calibrated, &self.processing, &self.failed]
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(value, "" | "0" | "false" | "off")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_form_uses_initial_values() {
        let form = ImageFilterForm::from_query(&QueryParams::parse("sort=date"));
        assert_eq!(form, ImageFilterForm::default());
        assert!(form.calibrated.checked);
        assert!(!form.processing.checked);
    }

    #[test]
    fn bound_form_reads_each_key() {
        let form = ImageFilterForm::from_query(&QueryParams::parse("processing=on&failed=0"));
        assert!(!form.calibrated.checked);
        assert!(form.processing.checked);
        assert!(!form.failed.checked);
    }

    #[test]
    fn field_ids_follow_names() {
        let form = ImageFilterForm::default();
        let ids: Vec<String> = form.fields().iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["id_calibrated", "id_processing", "id_failed"]);
    }
}
