//! Caller-side session: owns the point set, the running flag and the engine.
//!
//! A session is what an interactive front end drives. Points can be edited
//! while the session is stopped; `start` checks the point count, builds a
//! fresh engine and sets the running flag, after which every `tick` advances
//! one generation. A stopped session does no work on `tick`.

use crate::schema::{ConfigError, EngineConfig, PointSet, PointSetError};

use super::engine::{GenerationSnapshot, LineFitEngine};

/// Errors raised when starting a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Point set rejected: {0}")]
    Points(#[from] PointSetError),
    #[error("Config validation failed: {0}")]
    Config(#[from] ConfigError),
}

/// Interactive fitting session.
pub struct FitSession {
    config: EngineConfig,
    points: PointSet,
    engine: Option<LineFitEngine>,
    running: bool,
}

impl FitSession {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            points: PointSet::new(),
            engine: None,
            running: false,
        }
    }

    pub fn with_points(mut self, points: PointSet) -> Self {
        self.points = points;
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Mutable access to the points, only while stopped.
    pub fn points_mut(&mut self) -> Option<&mut PointSet> {
        (!self.running).then_some(&mut self.points)
    }

    /// Engine of the most recent run, kept after `stop` for display.
    pub fn engine(&self) -> Option<&LineFitEngine> {
        self.engine.as_ref()
    }

    /// Validate the points, build a new engine and start running.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.points.ensure_startable()?;
        let engine = LineFitEngine::new(self.config.clone(), self.points.as_slice())?;
        log::info!(
            "Session started with {} points (seed {})",
            self.points.len(),
            engine.seed()
        );
        self.engine = Some(engine);
        self.running = true;
        Ok(())
    }

    /// Stop running. The last generation stays available.
    pub fn stop(&mut self) {
        if self.running {
            log::info!(
                "Session stopped at generation {}",
                self.engine.as_ref().map_or(0, |e| e.generation())
            );
        }
        self.running = false;
    }

    /// Re-randomise the current run without touching the running flag.
    ///
    /// Returns `false` when there is no engine to restart.
    pub fn restart(&mut self) -> bool {
        match self.engine.as_mut() {
            Some(engine) => {
                engine.start();
                log::info!("Session restarted (seed {})", engine.seed());
                true
            }
            None => false,
        }
    }

    /// Run one generation when running. Returns whether any work was done.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        match self.engine.as_mut() {
            Some(engine) => {
                engine.step();
                true
            }
            None => false,
        }
    }

    /// Current generation, best line and population, if a run exists.
    pub fn snapshot(&self) -> Option<GenerationSnapshot> {
        self.engine.as_ref().map(LineFitEngine::snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Point;

    fn seeded() -> EngineConfig {
        EngineConfig {
            random_seed: Some(99),
            ..Default::default()
        }
    }

    fn three_points() -> PointSet {
        vec![Point::new(-10, -10), Point::new(0, 0), Point::new(10, 10)].into()
    }

    #[test]
    fn test_start_requires_three_points() {
        let mut session = FitSession::new(seeded());
        assert!(matches!(
            session.start(),
            Err(SessionError::Points(PointSetError::TooFewPoints { found: 0, .. }))
        ));

        let points = session.points_mut().unwrap();
        points.push(Point::new(1, 1));
        points.push(Point::new(2, 2));
        assert!(session.start().is_err());
        assert!(!session.is_running());
        assert!(session.engine().is_none());

        session.points_mut().unwrap().push(Point::new(3, 3));
        session.start().unwrap();
        assert!(session.is_running());
    }

    #[test]
    fn test_start_rejects_invalid_config() {
        let config = EngineConfig {
            population_size: 1,
            ..Default::default()
        };
        let mut session = FitSession::new(config).with_points(three_points());
        assert!(matches!(
            session.start(),
            Err(SessionError::Config(ConfigError::InvalidPopulationSize(1)))
        ));
        let err = session.start().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Config validation failed: Population size must be at least 2, got 1"
        );
    }

    #[test]
    fn test_tick_only_when_running() {
        let mut session = FitSession::new(seeded()).with_points(three_points());
        assert!(!session.tick());

        session.start().unwrap();
        for _ in 0..5 {
            assert!(session.tick());
        }
        assert_eq!(session.snapshot().unwrap().generation, 5);

        session.stop();
        assert!(!session.tick());
        assert_eq!(session.snapshot().unwrap().generation, 5);
    }

    #[test]
    fn test_points_locked_while_running() {
        let mut session = FitSession::new(seeded()).with_points(three_points());
        session.start().unwrap();
        assert!(session.points_mut().is_none());
        session.stop();
        assert!(session.points_mut().is_some());
    }

    #[test]
    fn test_restart_resets_generation() {
        let mut session = FitSession::new(seeded()).with_points(three_points());
        assert!(!session.restart());

        session.start().unwrap();
        session.tick();
        session.tick();
        assert!(session.restart());
        assert!(session.is_running());
        assert_eq!(session.engine().unwrap().generation(), 0);
    }
}
