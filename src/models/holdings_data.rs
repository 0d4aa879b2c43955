use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use super::{Holding, Summary};

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct HoldingsData {
    holdings: Vec<Holding>,
    summary: Summary,
}
