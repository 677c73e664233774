//! Static meal and workout catalogs
//!
//! Entry order is part of the contract: selection takes the first match in
//! catalog order and lists substitutions in catalog order.

use crate::models::{MealSuggestion, MealTag, WorkoutIntensity, WorkoutSuggestion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub approx_calories: i32,
    pub tags: &'static [MealTag],
}

impl MealTemplate {
    #[inline]
    pub fn has_tag(&self, tag: MealTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn to_suggestion(&self, substitutions: Vec<MealSuggestion>) -> MealSuggestion {
        MealSuggestion {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            approx_calories: self.approx_calories,
            tags: self.tags.to_vec(),
            substitutions,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub details: &'static str,
    pub intensity: WorkoutIntensity,
}

impl WorkoutTemplate {
    pub fn to_suggestion(&self, substitutions: Vec<WorkoutSuggestion>) -> WorkoutSuggestion {
        WorkoutSuggestion {
            id: self.id.to_string(),
            title: self.title.to_string(),
            details: self.details.to_string(),
            intensity: self.intensity,
            substitutions,
        }
    }
}

use MealTag::*;

pub static MEAL_CATALOG: &[MealTemplate] = &[
    MealTemplate {
        id: "oats_greek",
        title: "Greek yogurt oats",
        description: "Oats + Greek yogurt + berries + nuts (balanced, easy).",
        approx_calories: 450,
        tags: &[Balanced, HighProtein, Vegetarian, NoBeef, NoPork],
    },
    MealTemplate {
        id: "eggs_toast",
        title: "Eggs & toast",
        description: "2 eggs + wholegrain toast + fruit.",
        approx_calories: 480,
        tags: &[Balanced, HighProtein, NoBeef, NoPork],
    },
    MealTemplate {
        id: "tofu_bowl",
        title: "Tofu rice bowl",
        description: "Tofu + rice + mixed veggies (simple vegetarian bowl).",
        approx_calories: 650,
        tags: &[Balanced, Vegetarian, NoBeef, NoPork, Halal],
    },
    MealTemplate {
        id: "chicken_salad",
        title: "Chicken salad wrap",
        description: "Chicken + salad + wrap (high protein).",
        approx_calories: 620,
        tags: &[HighProtein, NoPork, NoBeef, Halal, LowerFat],
    },
    MealTemplate {
        id: "salmon_veg",
        title: "Salmon + veggies",
        description: "Salmon + veggies + small rice portion.",
        approx_calories: 720,
        tags: &[Balanced, HighProtein, NoPork, NoBeef, Halal],
    },
    MealTemplate {
        id: "lentil_soup",
        title: "Lentil soup + bread",
        description: "Lentil soup + wholegrain bread (warm & filling).",
        approx_calories: 560,
        tags: &[Balanced, Vegetarian, NoBeef, NoPork, Halal, LowerFat],
    },
    MealTemplate {
        id: "beef_bowl",
        title: "Beef veggie bowl",
        description: "Lean beef + veggies + rice (balanced).",
        approx_calories: 750,
        tags: &[Balanced, HighProtein, NoPork],
    },
    MealTemplate {
        id: "pork_noodles",
        title: "Pork noodles",
        description: "Pork noodles + greens (comfort food).",
        approx_calories: 780,
        tags: &[Balanced, NoBeef],
    },
];

pub static WORKOUT_CATALOG: &[WorkoutTemplate] = &[
    WorkoutTemplate {
        id: "walk_30",
        title: "Walk 30 minutes",
        details: "Easy pace. Aim for light sweating, able to talk.",
        intensity: WorkoutIntensity::Low,
    },
    WorkoutTemplate {
        id: "mobility_12",
        title: "Mobility 12 minutes",
        details: "Neck/shoulders/hips + gentle stretches. No pain.",
        intensity: WorkoutIntensity::Low,
    },
    WorkoutTemplate {
        id: "strength_20",
        title: "Strength 20 minutes",
        details: "3 rounds: squats, push-ups (or incline), rows (band), plank.",
        intensity: WorkoutIntensity::Moderate,
    },
    WorkoutTemplate {
        id: "interval_16",
        title: "Intervals 16 minutes",
        details: "8 rounds: 40s brisk + 80s easy. Stop if dizzy or painful.",
        intensity: WorkoutIntensity::High,
    },
];
