//! Computed picks for one project, before overrides are applied.

use std::path::PathBuf;

use crate::input::ImageFile;

use super::label::PickLabel;
use super::selector::{pick_by_fraction, spaced_picks};

/// Where in the final sequence detail close-ups are sampled.
pub const DETAIL_FRACTIONS: [f64; 2] = [0.6, 0.85];

/// A labelled slot and the image the selector chose for it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub label: PickLabel,
    pub computed: Option<PathBuf>,
}

/// The algorithmic picks for a project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionPlan {
    /// One entry per process phase, `None` when the process set is empty.
    pub phases: Vec<(PickLabel, Option<PathBuf>)>,
    /// Hero shots spread across the final set.
    pub heroes: Vec<PathBuf>,
    /// Close-ups from the later part of the final set, never a hero.
    pub details: Vec<PathBuf>,
}

impl SelectionPlan {
    /// Select picks from an ordered process sequence and the final sequence.
    pub fn build(
        process: &[ImageFile],
        finals: &[ImageFile],
        max_finals: usize,
        detail_count: usize,
    ) -> Self {
        let phases = PickLabel::PHASES
            .into_iter()
            .map(|label| {
                let fraction = label.phase_fraction().unwrap_or(0.0);
                let pick = pick_by_fraction(process, fraction).map(|img| img.path().to_path_buf());
                (label, pick)
            })
            .collect();

        let heroes: Vec<PathBuf> = spaced_picks(finals, max_finals)
            .into_iter()
            .map(|img| img.path().to_path_buf())
            .collect();

        let mut details: Vec<PathBuf> = Vec::new();
        for fraction in DETAIL_FRACTIONS {
            if let Some(img) = pick_by_fraction(finals, fraction) {
                let path = img.path().to_path_buf();
                if !heroes.contains(&path) && !details.contains(&path) {
                    details.push(path);
                }
            }
        }
        details.truncate(detail_count);

        Self {
            phases,
            heroes,
            details,
        }
    }

    /// All export slots in order: phases, then heroes, then details.
    pub fn slots(&self) -> Vec<Slot> {
        let phases = self.phases.iter().map(|(label, pick)| Slot {
            label: label.clone(),
            computed: pick.clone(),
        });
        let heroes = self.heroes.iter().enumerate().map(|(i, path)| Slot {
            label: PickLabel::Finished(i + 1),
            computed: Some(path.clone()),
        });
        let details = self.details.iter().enumerate().map(|(i, path)| Slot {
            label: PickLabel::Detail(i + 1),
            computed: Some(path.clone()),
        });
        phases.chain(heroes).chain(details).collect()
    }

    /// Best-of candidates: the last hero, plus the first when there are more
    /// than two heroes.
    pub fn best_of(&self) -> Vec<Slot> {
        let mut picks: Vec<&PathBuf> = Vec::new();
        if let Some(last) = self.heroes.last() {
            picks.push(last);
            if self.heroes.len() > 2 {
                picks.push(&self.heroes[0]);
            }
        }
        picks
            .into_iter()
            .enumerate()
            .map(|(i, path)| Slot {
                label: PickLabel::Best(i + 1),
                computed: Some(path.clone()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(names: &[String]) -> Vec<ImageFile> {
        names
            .iter()
            .filter_map(|n| ImageFile::from_path(format!("p/{}", n)))
            .collect()
    }

    fn numbered(prefix: &str, n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("{}{}.jpg", prefix, i)).collect()
    }

    fn name(path: &PathBuf) -> String {
        path.file_name().unwrap().to_string_lossy().into_owned()
    }

    #[test]
    fn test_empty_project() {
        let plan = SelectionPlan::build(&[], &[], 5, 2);
        assert_eq!(plan.phases.len(), 4);
        assert!(plan.phases.iter().all(|(_, p)| p.is_none()));
        assert!(plan.heroes.is_empty());
        assert!(plan.details.is_empty());
        assert!(plan.best_of().is_empty());
    }

    #[test]
    fn test_fox_plan() {
        let process = images(&(1..=10).map(|i| format!("fox_{:03}.jpg", i)).collect::<Vec<_>>());
        let finals = images(&numbered("fox_f", 6));
        let plan = SelectionPlan::build(&process, &finals, 5, 2);

        let phase_names: Vec<String> = plan.phases.iter().map(|(_, p)| name(p.as_ref().unwrap())).collect();
        assert_eq!(phase_names, vec!["fox_001.jpg", "fox_003.jpg", "fox_005.jpg", "fox_008.jpg"]);

        let heroes: Vec<String> = plan.heroes.iter().map(name).collect();
        assert_eq!(heroes, vec!["fox_f1.jpg", "fox_f2.jpg", "fox_f3.jpg", "fox_f5.jpg", "fox_f6.jpg"]);

        // 0.6 -> f4; 0.85 -> f5 which is already a hero.
        let details: Vec<String> = plan.details.iter().map(name).collect();
        assert_eq!(details, vec!["fox_f4.jpg"]);

        let best: Vec<(String, String)> = plan
            .best_of()
            .iter()
            .map(|s| (s.label.to_string(), name(s.computed.as_ref().unwrap())))
            .collect();
        assert_eq!(
            best,
            vec![
                ("Best_1".to_string(), "fox_f6.jpg".to_string()),
                ("Best_2".to_string(), "fox_f1.jpg".to_string())
            ]
        );
    }

    #[test]
    fn test_details_respect_count() {
        let finals = images(&numbered("f", 20));
        let plan = SelectionPlan::build(&[], &finals, 2, 1);
        assert_eq!(plan.details.len(), 1);

        let plan = SelectionPlan::build(&[], &finals, 2, 0);
        assert!(plan.details.is_empty());
    }

    #[test]
    fn test_two_heroes_single_best() {
        let finals = images(&numbered("f", 2));
        let plan = SelectionPlan::build(&[], &finals, 5, 2);
        assert_eq!(plan.heroes.len(), 2);
        assert_eq!(plan.best_of().len(), 1);
        assert!(plan.details.is_empty());
    }

    #[test]
    fn test_slot_order() {
        let process = images(&numbered("p", 4));
        let finals = images(&numbered("f", 12));
        let plan = SelectionPlan::build(&process, &finals, 3, 2);

        let labels: Vec<String> = plan.slots().iter().map(|s| s.label.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "RawWood",
                "RoughShape",
                "DefiningForms",
                "Detailing",
                "Finished_1",
                "Finished_2",
                "Finished_3",
                "Detail_1",
                "Detail_2"
            ]
        );
    }
}
