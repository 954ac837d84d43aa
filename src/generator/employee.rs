//! Employee generation

use super::{names, new_id};
use crate::company::{Employee, Personality, SkillSet, FOUNDER_ROLE};
use ahash::AHashSet;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// Base skill level for the founder
const FOUNDER_BASE_SKILL: f64 = 80.0;
/// Skills vary by up to half this around the base
const SKILL_SPREAD: f64 = 30.0;
const BASE_SALARY: f64 = 3_000.0;
const SALARY_PER_SKILL: f64 = 7_000.0;
const MAX_SALARY: f64 = 7_000.0;
const NAME_RETRIES: usize = 100;

pub const FOUNDER_NAME: &str = "You";

const TECHNICAL_ROLES: &[&str] = &[
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "DevOps Engineer",
    "QA Engineer",
];
const SALES_ROLES: &[&str] = &[
    "Sales Representative",
    "Business Development",
    "Account Manager",
    "Sales Engineer",
];
const DESIGN_ROLES: &[&str] = &[
    "UI Designer",
    "UX Designer",
    "Product Designer",
    "Visual Designer",
];
const MANAGEMENT_ROLES: &[&str] = &[
    "Project Manager",
    "Product Manager",
    "Team Lead",
    "Operations Manager",
];

/// Generates employees and remembers which names are taken
#[derive(Debug, Default, Clone)]
pub struct EmployeeGenerator {
    used_names: AHashSet<String>,
}

impl EmployeeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every used name
    pub fn reset(&mut self) {
        self.used_names.clear();
    }

    /// Mark a name as taken, e.g. after loading a saved company
    pub fn reserve_name(&mut self, name: &str) {
        self.used_names.insert(name.to_string());
    }

    pub fn used_name_count(&self) -> usize {
        self.used_names.len()
    }

    /// A hire candidate for the given month
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R, current_month: u32) -> Employee {
        self.build(rng, current_month, false)
    }

    /// The founder: strong skills, full morale and loyalty, no salary
    pub fn generate_founder<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        current_month: u32,
    ) -> Employee {
        self.build(rng, current_month, true)
    }

    fn build<R: Rng + ?Sized>(&mut self, rng: &mut R, current_month: u32, founder: bool) -> Employee {
        let personality = select_personality(rng);
        let skills = generate_skills(rng, personality, founder);

        let (name, role, salary, morale, loyalty) = if founder {
            (
                FOUNDER_NAME.to_string(),
                FOUNDER_ROLE.to_string(),
                0,
                100.0,
                100.0,
            )
        } else {
            let role = select_role(rng, &skills).to_string();
            let name = self.unique_name(rng);
            let morale = 50.0 + rng.gen::<f64>() * 30.0;
            let loyalty = 30.0 + rng.gen::<f64>() * 40.0;
            (name, role, salary_for(&skills, personality), morale, loyalty)
        };

        Employee {
            id: new_id(rng),
            name,
            role,
            personality,
            skills,
            morale,
            productivity: 1.0,
            loyalty,
            salary,
            hired_month: current_month,
            quit_month: None,
            founder,
            project_assignments: SmallVec::new(),
        }
    }

    /// Rejection-sample against used names, then accept a duplicate
    fn unique_name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let mut name = names::random_name(rng);
        let mut attempts = 0;
        while self.used_names.contains(&name) && attempts < NAME_RETRIES {
            name = names::random_name(rng);
            attempts += 1;
        }
        self.used_names.insert(name.clone());
        name
    }
}

/// Five equal buckets over `Personality::ALL`
fn select_personality<R: Rng + ?Sized>(rng: &mut R) -> Personality {
    let roll: f64 = rng.gen();
    let bucket = ((roll * 5.0) as usize).min(Personality::ALL.len() - 1);
    Personality::ALL[bucket]
}

#[inline]
fn clamp_skill(value: f64) -> f64 {
    value.floor().clamp(0.0, 100.0)
}

fn generate_skills<R: Rng + ?Sized>(
    rng: &mut R,
    personality: Personality,
    founder: bool,
) -> SkillSet {
    let base = if founder {
        FOUNDER_BASE_SKILL
    } else {
        30.0 + rng.gen::<f64>() * 40.0
    };

    let mut roll = || clamp_skill(base + (rng.gen::<f64>() - 0.5) * SKILL_SPREAD);
    let rolled = SkillSet::new(roll(), roll(), roll(), roll());

    (rolled + personality.profile().skill_modifiers).map(clamp_skill)
}

/// Highest skill picks the family; ties go technical, sales, design, management
fn select_role<R: Rng + ?Sized>(rng: &mut R, skills: &SkillSet) -> &'static str {
    let max = skills
        .values()
        .into_iter()
        .fold(f64::NEG_INFINITY, f64::max);

    let family = if skills.technical == max {
        TECHNICAL_ROLES
    } else if skills.sales == max {
        SALES_ROLES
    } else if skills.design == max {
        DESIGN_ROLES
    } else {
        MANAGEMENT_ROLES
    };
    family.choose(rng).copied().unwrap_or("Generalist")
}

/// Monthly salary: skill-based, personality-weighted, capped, rounded to 100
pub fn salary_for(skills: &SkillSet, personality: Personality) -> i64 {
    let raw = (BASE_SALARY + skills.average() / 100.0 * SALARY_PER_SKILL)
        * personality.profile().salary_multiplier;
    ((raw.min(MAX_SALARY) / 100.0).round() * 100.0) as i64
}
