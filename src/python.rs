//! Python bindings
//!
//! A `GameSession` class over [`crate::simulator::GameSession`]. Player
//! actions return `(ok, message)` tuples so a front end can print the
//! message either way; only malformed input JSON raises.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::company::{Employee, GameEvent, ProjectKind};
use crate::config::{CultureAxis, EventDeck, GameConfig};
use crate::culture::describe_culture;
use crate::error::{GameError, Result};
use crate::finance::runway;
use crate::simulator::{GameSession, MonthResult, SimulationEngine};
use crate::Company;

// ============================================================================
// Helper Functions
// ============================================================================

/// Fold an action result into the `(ok, message)` shape
#[inline]
fn reply<T>(result: Result<T>, describe: impl FnOnce(T) -> String) -> (bool, String) {
    match result {
        Ok(value) => (true, describe(value)),
        Err(err) => (false, err.to_string()),
    }
}

fn build_engine(
    seed: Option<u64>,
    config_json: Option<&str>,
    events_json: Option<&str>,
) -> PyResult<SimulationEngine> {
    let config = config_json
        .map(GameConfig::from_json)
        .transpose()?
        .unwrap_or_default();
    let deck = events_json
        .map(EventDeck::from_json)
        .transpose()?
        .unwrap_or_default();
    Ok(SimulationEngine::with_config(config, deck, seed))
}

fn employee_to_dict<'py>(py: Python<'py>, employee: &Employee) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("id", &employee.id)?;
    dict.set_item("name", &employee.name)?;
    dict.set_item("role", &employee.role)?;
    dict.set_item("personality", employee.personality.profile().name)?;
    dict.set_item("salary", employee.salary)?;
    dict.set_item("morale", employee.morale)?;
    dict.set_item("loyalty", employee.loyalty)?;

    let skills = PyDict::new(py);
    skills.set_item("technical", employee.skills.technical)?;
    skills.set_item("sales", employee.skills.sales)?;
    skills.set_item("design", employee.skills.design)?;
    skills.set_item("management", employee.skills.management)?;
    dict.set_item("skills", skills)?;
    Ok(dict)
}

fn event_to_dict<'py>(py: Python<'py>, event: &GameEvent) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("id", &event.id)?;
    dict.set_item("title", &event.title)?;
    dict.set_item("description", &event.description)?;
    dict.set_item("month", event.month_occurred)?;

    let choices = PyList::empty(py);
    for choice in &event.choices {
        let choice_dict = PyDict::new(py);
        choice_dict.set_item("id", &choice.id)?;
        choice_dict.set_item("label", &choice.label)?;
        choice_dict.set_item("description", &choice.description)?;
        choices.append(choice_dict)?;
    }
    dict.set_item("choices", choices)?;
    Ok(dict)
}

fn month_result_to_dict<'py>(py: Python<'py>, result: &MonthResult) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("success", result.success)?;
    dict.set_item("month", result.snapshot.month)?;
    dict.set_item("cash", result.snapshot.cash)?;
    dict.set_item("revenue", result.snapshot.financials.revenue)?;
    dict.set_item("expenses", result.snapshot.financials.expenses())?;
    dict.set_item("net_cashflow", result.snapshot.financials.net_cashflow)?;
    dict.set_item("messages", PyList::new(py, &result.messages)?)?;

    let events = PyList::empty(py);
    for event in &result.events {
        events.append(event_to_dict(py, event)?)?;
    }
    dict.set_item("events", events)?;
    Ok(dict)
}

// ============================================================================
// GameSession PyClass
// ============================================================================

/// One game: a company, its engine and the candidate on offer
#[pyclass(name = "GameSession")]
pub struct PyGameSession {
    inner: GameSession,
}

#[pymethods]
impl PyGameSession {
    /// Start a new company
    ///
    /// # Arguments
    /// * `company_name` - Display name of the company
    /// * `seed` - Fixed RNG seed for a replayable game
    /// * `config_json` - Optional `GameConfig` overrides
    /// * `events_json` - Optional replacement event catalog
    #[new]
    #[pyo3(signature = (company_name, seed=None, config_json=None, events_json=None))]
    fn new(
        company_name: &str,
        seed: Option<u64>,
        config_json: Option<&str>,
        events_json: Option<&str>,
    ) -> PyResult<Self> {
        let engine = build_engine(seed, config_json, events_json)?;
        Ok(Self {
            inner: GameSession::with_engine(engine, company_name),
        })
    }

    /// Resume from `state_json()` output
    #[staticmethod]
    #[pyo3(signature = (state_json, seed=None, config_json=None, events_json=None))]
    fn load(
        state_json: &str,
        seed: Option<u64>,
        config_json: Option<&str>,
        events_json: Option<&str>,
    ) -> PyResult<Self> {
        let engine = build_engine(seed, config_json, events_json)?;
        let company = Company::from_json(state_json)?;
        Ok(Self {
            inner: GameSession::from_company(engine, company),
        })
    }

    // ------------------------------------------------------------------------
    // Getter Properties
    // ------------------------------------------------------------------------

    #[getter]
    fn company_name(&self) -> String {
        self.inner.company().name.clone()
    }

    #[getter]
    fn month(&self) -> u32 {
        self.inner.company().current_month
    }

    #[getter]
    fn cash(&self) -> i64 {
        self.inner.company().cash
    }

    #[getter]
    fn reputation(&self) -> f64 {
        self.inner.company().reputation
    }

    #[getter]
    fn score(&self) -> i64 {
        self.inner.score()
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// Months of cash left at the current burn, `None` when nothing burns
    #[getter]
    fn runway(&self) -> Option<i64> {
        runway(self.inner.company(), self.inner.engine().config())
    }

    #[getter]
    fn culture_description(&self) -> String {
        describe_culture(&self.inner.company().culture)
    }

    // ------------------------------------------------------------------------
    // State Access
    // ------------------------------------------------------------------------

    /// Whole company as JSON
    fn state_json(&self) -> PyResult<String> {
        Ok(self.inner.company().to_json()?)
    }

    fn leaderboard_json(&self) -> PyResult<String> {
        Ok(serde_json::to_string(&self.inner.leaderboard_entry()).map_err(GameError::from)?)
    }

    fn pending_events(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for event in &self.inner.company().pending_events {
            list.append(event_to_dict(py, event)?)?;
        }
        Ok(list.into())
    }

    fn pending_hire(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        match self.inner.pending_hire() {
            Some(candidate) => Ok(employee_to_dict(py, candidate)?.into()),
            None => Ok(py.None()),
        }
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    /// Simulate one month. Returns `(True, result_dict)` or `(False, message)`.
    fn advance_month(&mut self, py: Python<'_>) -> PyResult<(bool, Py<PyAny>)> {
        match self.inner.advance_month() {
            Ok(result) => Ok((true, month_result_to_dict(py, &result)?.into_any().unbind())),
            Err(err) => Ok((false, err.to_string().into_pyobject(py)?.into_any().unbind())),
        }
    }

    fn hire_candidate(&mut self) -> (bool, String) {
        reply(self.inner.hire_candidate(), |candidate| {
            format!(
                "Candidate: {} ({}, {}) asking ${}/month",
                candidate.name,
                candidate.role,
                candidate.personality.profile().name,
                candidate.salary
            )
        })
    }

    fn confirm_hire(&mut self) -> (bool, String) {
        let name = self.inner.pending_hire().map(|e| e.name.clone());
        reply(self.inner.confirm_hire(), |_| {
            format!("Hired {}", name.unwrap_or_default())
        })
    }

    fn reject_hire(&mut self) -> (bool, String) {
        match self.inner.reject_hire() {
            Some(candidate) => (true, format!("Passed on {}", candidate.name)),
            None => (false, "No candidate to reject".to_string()),
        }
    }

    fn fire_employee(&mut self, employee_id: &str) -> (bool, String) {
        let name = self
            .inner
            .company()
            .find_employee(employee_id)
            .map(|e| e.name.clone());
        reply(self.inner.fire_employee(employee_id), |severance| {
            format!(
                "Fired {}. Severance paid: ${}",
                name.unwrap_or_default(),
                severance
            )
        })
    }

    #[pyo3(signature = (employee_id, project_id, allocation=100.0))]
    fn assign(&mut self, employee_id: &str, project_id: &str, allocation: f64) -> (bool, String) {
        reply(
            self.inner
                .assign_employee_to_project(employee_id, project_id, allocation),
            |_| format!("Assigned at {}%", allocation),
        )
    }

    fn unassign(&mut self, employee_id: &str, project_id: &str) -> (bool, String) {
        reply(
            self.inner.unassign_employee_from_project(employee_id, project_id),
            |_| "Unassigned".to_string(),
        )
    }

    /// `kind` is one of clientWork, productFeature, maintenance, rnd
    #[pyo3(signature = (kind, name=None))]
    fn create_project(&mut self, kind: &str, name: Option<&str>) -> (bool, String) {
        let Some(kind) = ProjectKind::from_str(kind) else {
            return (false, format!("Unknown project type: {}", kind));
        };
        let project = self.inner.create_project(kind, name);
        (
            true,
            format!("Created \"{}\" ({}) worth ${}", project.name, project.id, project.value),
        )
    }

    fn cancel_project(&mut self, project_id: &str) -> (bool, String) {
        reply(self.inner.cancel_project(project_id), |_| {
            "Project cancelled".to_string()
        })
    }

    fn resolve_event(&mut self, event_id: &str, choice_id: &str) -> (bool, String) {
        reply(self.inner.resolve_event(event_id, choice_id), |resolution| {
            resolution.message()
        })
    }

    fn adjust_culture(&mut self, axis: &str, value: f64) -> (bool, String) {
        let Some(axis) = CultureAxis::from_str(axis) else {
            return (false, format!("Unknown culture axis: {}", axis));
        };
        reply(self.inner.adjust_culture(axis, value), |_| {
            "Culture updated".to_string()
        })
    }

    #[pyo3(signature = (company_name=None))]
    fn reset(&mut self, company_name: Option<&str>) {
        self.inner.reset(company_name);
    }
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn company_sim_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameSession>()?;
    Ok(())
}
