//! Animal records service

use crate::{
    error::AppResult,
    models::animal::{Animal, AnimalQuery, AnimalRef, AnimalSurvey, CreateAnimal, SurveyOutcome},
    repository::Repository,
};

#[derive(Clone)]
pub struct AnimalsService {
    repository: Repository,
}

impl AnimalsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Filtered animal listing. A storage failure degrades to an empty
    /// result so the listing stays available.
    pub async fn list_animals(&self, query: &AnimalQuery) -> Vec<Animal> {
        match self.repository.animals.search(query).await {
            Ok(animals) => animals,
            Err(e) => {
                tracing::warn!("Animal listing failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Id+name lookup list for form selects
    pub async fn lookup(&self) -> AppResult<Vec<AnimalRef>> {
        self.repository.animals.lookup().await
    }

    /// Add an animal record directly
    pub async fn add_animal(&self, animal: CreateAnimal) -> AppResult<Animal> {
        self.repository.animals.create(&animal).await
    }

    /// Record a survey: updates the tracked population when the animal is
    /// already known in the zone, creates a new record otherwise.
    pub async fn log_survey(&self, survey: AnimalSurvey) -> AppResult<SurveyOutcome> {
        let existing = self
            .repository
            .animals
            .find_by_name_and_zone(&survey.name, &survey.habitat_zone)
            .await?;

        match existing {
            Some(animal) => {
                let updated = self
                    .repository
                    .animals
                    .record_survey(animal.id, survey.count, &survey.status, survey.survey_date)
                    .await?;
                let message = format!(
                    "Survey recorded: {} population in zone {} updated to {}",
                    updated.name, updated.habitat_zone, updated.count
                );
                Ok(SurveyOutcome {
                    animal: updated,
                    created: false,
                    message,
                })
            }
            None => {
                let created = self
                    .repository
                    .animals
                    .create(&CreateAnimal {
                        name: survey.name,
                        species_id: survey.species_id,
                        status: survey.status,
                        count: survey.count,
                        habitat_zone: survey.habitat_zone,
                        last_survey: Some(survey.survey_date),
                        image_url: None,
                    })
                    .await?;
                let message = format!(
                    "Survey recorded: {} now tracked in zone {}",
                    created.name, created.habitat_zone
                );
                Ok(SurveyOutcome {
                    animal: created,
                    created: true,
                    message,
                })
            }
        }
    }
}
