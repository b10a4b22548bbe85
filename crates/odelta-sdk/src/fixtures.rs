//! Test fixtures shared by the SDK tests.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Sample {
    pub string_property: Option<String>,
    pub int_property: i32,
    pub double_property: f64,
    pub list_of_object_property: Option<Vec<Sample>>,
    pub list_of_string_property: Option<Vec<String>>,
    pub list_of_int_property: Option<Vec<i32>>,
    pub list_of_double_property: Option<Vec<f64>>,
}

pub fn simple() -> Sample {
    Sample {
        string_property: Some("this is a string".into()),
        int_property: 1234,
        double_property: 56.789,
        ..Default::default()
    }
}

pub fn with_strings(mut sample: Sample) -> Sample {
    sample.list_of_string_property = Some(
        ["this", "is", "a", "list", "of", "strings"]
            .into_iter()
            .map(String::from)
            .collect(),
    );
    sample
}

pub fn with_objects(mut sample: Sample) -> Sample {
    let item = |s: &str, i: i32, d: f64| Sample {
        string_property: Some(s.into()),
        int_property: i,
        double_property: d,
        ..Default::default()
    };
    sample.list_of_object_property = Some(vec![
        item("this is the first object", 1, 1.01),
        item("this is the second object", 2, 2.02),
        item("this is the third object", 3, 3.03),
    ]);
    sample
}

pub fn strings(sample: &mut Sample) -> &mut Vec<String> {
    sample.list_of_string_property.get_or_insert_with(Vec::new)
}

pub fn objects(sample: &mut Sample) -> &mut Vec<Sample> {
    sample.list_of_object_property.get_or_insert_with(Vec::new)
}
