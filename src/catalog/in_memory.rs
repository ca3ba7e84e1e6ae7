use crate::catalog::{CatalogError, CatalogProvider};
use crate::domain::RestArea;
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone, Default, Debug)]
pub struct InMemoryCatalog {
    rest_areas: Vec<RestArea>,
}

impl InMemoryCatalog {
    pub fn new(rest_areas: Vec<RestArea>) -> Self {
        InMemoryCatalog { rest_areas }
    }

    /// Parks and rest spaces around Funabashi, Chiba and along the Tōyō Rapid Railway line.
    pub fn sample() -> Self {
        let sample_data = [
            ("船橋港親水公園", 35.6881, 139.9926, "東京湾を望む公園。トイレあり。"),
            ("船橋総合運動公園", 35.7042, 140.0157, "広大な運動公園。トイレ、ベンチあり。"),
            ("ららぽーとTOKYO-BAY (休憩スペース)", 35.6798, 140.0101, "ショッピングモール内の休憩スペース。"),
            ("海浜幕張公園 (Bブロック)", 35.6493, 140.0385, "芝生広場とトイレがある公園。"),
            ("稲毛海浜公園 (Dブロック)", 35.6329, 140.0763, "広い公園で、ベンチやトイレが豊富。"),
            ("船橋アンデルセン公園", 35.7505, 140.0385, "広大な自然公園。休憩スペース、トイレ多数。"),
            ("萱田地区公園", 35.7275, 140.1005, "八千代中央駅近くの公園。"),
            ("スポーツの杜公園", 35.7340, 140.0700, "八千代緑が丘駅近くの運動公園。"),
            ("西部近隣公園", 35.7380, 140.0650, "八千代緑が丘駅近くの広々とした公園。アスレチックあり。"),
            ("村上神明公園", 35.7480, 140.1300, "村上駅近くの公園。"),
        ];

        let rest_areas = sample_data
            .into_iter()
            .zip(1..)
            .map(|((name, latitude, longitude, description), id)| RestArea {
                id,
                name: name.to_string(),
                latitude,
                longitude,
                description: Some(description.to_string()),
            })
            .collect();

        InMemoryCatalog::new(rest_areas)
    }
}

#[cfg(test)]
impl InMemoryCatalog {
    pub fn rest_areas(&self) -> &[RestArea] {
        &self.rest_areas
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    #[instrument(skip(self))]
    async fn fetch_all_points(&self) -> Result<Vec<RestArea>, CatalogError> {
        debug!("📍 Serving {} rest area(s) from memory", self.rest_areas.len());
        Ok(self.rest_areas.clone())
    }
}
