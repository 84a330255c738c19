//! Simulation session: the hole-level state machine
//!
//! One `SimulationSession` owns the hole, the ball, the phase and the stroke
//! count. The host calls `request_shot` and `advance(dt)` and polls
//! `snapshot()`; nothing is pushed.
//!
//! Transitions:
//! - Intro --start--> Tee
//! - Tee --swing--> Flying --rest--> Tee | Putting | HoleOut
//! - Putting --putt--> RollingPutt --rest--> Putting | Tee | HoleOut
//! - HoleOut --next hole--> Intro

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::club::{Club, ClubCatalog};
use super::hole::{HoleLayout, generate_hole};
use super::shot::{ActiveShot, ShotMotion, ShotOutcome, ShotRequest, ShotVariance};
use super::state::{BallState, GamePhase, HoleSummary, Lie, Snapshot};
use super::tick::SimulationClock;
use crate::error::{RequestRejected, TuningError};
use crate::tuning::Tuning;

/// Owns all mutable play state for one player
#[derive(Debug, Clone)]
pub struct SimulationSession {
    tuning: Tuning,
    catalog: ClubCatalog,
    rng: Pcg32,
    hole_number: u32,
    layout: HoleLayout,
    ball: BallState,
    phase: GamePhase,
    stroke_count: u32,
    suggested_club: Club,
    last_message: String,
    summary: Option<HoleSummary>,
    clock: SimulationClock,
    active: Option<ActiveShot>,
}

impl SimulationSession {
    /// New session with default tuning and a generated first hole
    pub fn new(seed: u64) -> Self {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let layout = generate_hole(&mut rng, &tuning);
        Self::build(rng, tuning, layout)
    }

    /// New session with custom tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let layout = generate_hole(&mut rng, &tuning);
        Ok(Self::build(rng, tuning, layout))
    }

    /// New session on a prepared hole (practice layouts, tools)
    pub fn with_layout(seed: u64, tuning: Tuning, layout: HoleLayout) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(Pcg32::seed_from_u64(seed), tuning, layout))
    }

    fn build(rng: Pcg32, tuning: Tuning, layout: HoleLayout) -> Self {
        let catalog = ClubCatalog::standard();
        let suggested_club = catalog.suggest_club(layout.total_distance_yards).clone();
        let mut session = Self {
            tuning,
            catalog,
            rng,
            hole_number: 0,
            layout,
            ball: BallState::on_tee(),
            phase: GamePhase::Intro,
            stroke_count: 0,
            suggested_club,
            last_message: String::new(),
            summary: None,
            clock: SimulationClock::new(),
            active: None,
        };
        session.install_current_hole();
        session
    }

    /// Generate a fresh hole, optionally reseeding first
    ///
    /// Cancels any shot in motion and resets ball, phase and strokes.
    pub fn generate_hole(&mut self, seed: Option<u64>) -> &HoleLayout {
        self.cancel_shot();
        if let Some(seed) = seed {
            self.rng = Pcg32::seed_from_u64(seed);
        }
        self.layout = generate_hole(&mut self.rng, &self.tuning);
        self.install_current_hole();
        &self.layout
    }

    /// Abandon the current hole and play a new one
    pub fn reset_hole(&mut self) {
        self.generate_hole(None);
    }

    /// Intro -> Tee
    pub fn start(&mut self) -> Result<(), RequestRejected> {
        if self.phase != GamePhase::Intro {
            return Err(RequestRejected::WrongPhase {
                action: "start the hole",
                phase: self.phase,
            });
        }
        self.suggested_club = self
            .catalog
            .suggest_club(self.layout.total_distance_yards)
            .clone();
        self.phase = GamePhase::Tee;
        self.last_message = format!(
            "Par {}, {:.0} yards. {} suggested",
            self.layout.par, self.layout.total_distance_yards, self.suggested_club.name
        );
        log::info!("Hole {} started", self.hole_number);
        Ok(())
    }

    /// HoleOut -> Intro with a newly generated hole
    pub fn next_hole(&mut self) -> Result<&HoleLayout, RequestRejected> {
        if self.phase != GamePhase::HoleOut {
            return Err(RequestRejected::WrongPhase {
                action: "start the next hole",
                phase: self.phase,
            });
        }
        Ok(self.generate_hole(None))
    }

    /// Swing or putt
    ///
    /// Refused while a shot is in motion or outside `Tee`/`Putting`. On the
    /// green the putter is always used, whatever club was passed.
    pub fn request_shot(&mut self, club: &Club, power_percent: f32) -> Result<(), RequestRejected> {
        if self.clock.is_simulating() {
            return Err(RequestRejected::ShotInProgress);
        }
        if !self.phase.accepts_shot() {
            return Err(RequestRejected::WrongPhase {
                action: "swing",
                phase: self.phase,
            });
        }

        let putting = self.phase == GamePhase::Putting;
        let club = if putting && !club.is_putter() {
            log::debug!("{} selected on the green; using the putter", club.name);
            self.catalog.putter().clone()
        } else {
            club.clone()
        };
        let request = ShotRequest::new(club, power_percent);
        if request.normalized_power() != power_percent {
            log::debug!(
                "Power {} normalized to {}",
                power_percent,
                request.normalized_power()
            );
        }

        let variance = ShotVariance::sample(&mut self.rng, self.ball.lie, &self.tuning);
        self.stroke_count += 1;
        self.active = Some(ActiveShot::launch(
            &mut self.ball,
            &request,
            &variance,
            &self.layout,
            &self.tuning,
            putting,
        ));
        self.clock.begin();
        self.phase = if putting {
            GamePhase::RollingPutt
        } else {
            GamePhase::Flying
        };
        log::info!(
            "Stroke {}: {} at {:.0}% from the {}",
            self.stroke_count,
            request.club.name,
            request.normalized_power(),
            self.ball.lie.as_str()
        );
        Ok(())
    }

    /// Host tick: advance the shot in motion by one frame
    pub fn advance(&mut self, frame_dt: f32) -> GamePhase {
        let Some(shot) = self.active.as_mut() else {
            return self.phase;
        };
        let ball = &mut self.ball;
        let layout = &self.layout;
        let tuning = &self.tuning;
        let outcome = self
            .clock
            .drive(frame_dt, tuning, |dt| shot.step(ball, layout, tuning, dt));

        if let Some(outcome) = outcome {
            let club_name = self
                .active
                .take()
                .map(|shot| shot.club_name)
                .unwrap_or_default();
            self.resolve_rest(&club_name, outcome);
        }
        self.phase
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            hole_number: self.hole_number,
            par: self.layout.par,
            phase: self.phase,
            ball_position: self.ball.position,
            stroke_count: self.stroke_count,
            lie: self.ball.lie,
            distance_to_hole_yards: self.distance_to_hole_yards(),
            suggested_club: self.suggested_club.clone(),
            last_message: self.last_message.clone(),
            is_simulating: self.clock.is_simulating(),
            summary: self.summary.clone(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_simulating(&self) -> bool {
        self.clock.is_simulating()
    }

    pub fn layout(&self) -> &HoleLayout {
        &self.layout
    }

    pub fn ball(&self) -> &BallState {
        &self.ball
    }

    pub fn stroke_count(&self) -> u32 {
        self.stroke_count
    }

    pub fn catalog(&self) -> &ClubCatalog {
        &self.catalog
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn summary(&self) -> Option<&HoleSummary> {
        self.summary.as_ref()
    }

    fn distance_to_hole_yards(&self) -> f32 {
        self.layout.distance_to_hole_yards(self.ball.position)
    }

    fn cancel_shot(&mut self) {
        if self.active.take().is_some() || self.clock.is_simulating() {
            log::warn!("Shot in motion cancelled by hole reset");
        }
        self.clock.stop();
    }

    /// Reset per-hole state for `self.layout`
    fn install_current_hole(&mut self) {
        self.hole_number += 1;
        self.ball = BallState::on_tee();
        self.ball.position += self.layout.tee_position;
        self.phase = GamePhase::Intro;
        self.stroke_count = 0;
        self.summary = None;
        self.suggested_club = self
            .catalog
            .suggest_club(self.layout.total_distance_yards)
            .clone();
        self.last_message = format!(
            "Hole {}: par {}, {:.0} yards",
            self.hole_number, self.layout.par, self.layout.total_distance_yards
        );
    }

    /// Pick the next phase once the ball has stopped
    fn resolve_rest(&mut self, club_name: &str, outcome: ShotOutcome) {
        let distance = outcome.distance_to_hole_yards;
        let shot = match outcome.motion {
            ShotMotion::Flight => format!(
                "{}: {:.0}y {}",
                club_name,
                outcome.carry_yards,
                outcome.shape()
            ),
            ShotMotion::Roll => format!("Putt rolled {:.1}y", outcome.carry_yards),
        };

        if distance <= self.tuning.holed_threshold_yards {
            let summary = HoleSummary::new(self.hole_number, self.layout.par, self.stroke_count);
            log::info!(
                "Hole {} complete: {} strokes on a par {} ({})",
                summary.hole_number,
                summary.strokes,
                summary.par,
                summary.label
            );
            self.last_message = format!("{}. In the hole! {}", shot, summary.label);
            self.summary = Some(summary);
            self.phase = GamePhase::HoleOut;
            return;
        }

        let previous = self.phase;
        match outcome.lie {
            Lie::Water => {
                self.stroke_count += 1;
                self.ball = BallState::on_tee();
                self.ball.position += self.layout.tee_position;
                self.phase = GamePhase::Tee;
                self.suggested_club = self
                    .catalog
                    .suggest_club(self.layout.total_distance_yards)
                    .clone();
                self.last_message = format!("{}. Water! Penalty stroke, back to the tee", shot);
            }
            Lie::Bunker => {
                self.phase = GamePhase::Tee;
                self.suggested_club = self.catalog.suggest_club(distance).clone();
                self.last_message = format!("{}. In the bunker, {:.0}y to the hole", shot, distance);
            }
            Lie::Green if distance <= self.tuning.putt_threshold_yards => {
                self.phase = GamePhase::Putting;
                self.suggested_club = self.catalog.putter().clone();
                self.last_message = format!("{}. {:.1}y to the hole", shot, distance);
            }
            _ => {
                self.phase = GamePhase::Tee;
                self.suggested_club = self.catalog.suggest_club(distance).clone();
                self.last_message = format!("{}. {:.0}y to the hole", shot, distance);
            }
        }
        log::info!(
            "{:?} -> {:?}: {} ({:.1}y to go, {} strokes)",
            previous,
            self.phase,
            outcome.lie.as_str(),
            distance,
            self.stroke_count
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BALL_RADIUS;
    use crate::sim::hole::Hazard;
    use glam::Vec3;
    use proptest::prelude::*;

    const FRAME: f32 = 1.0 / 60.0;

    /// Tuning with every random draw collapsed to a pure strike
    fn pure_tuning() -> Tuning {
        Tuning {
            accuracy_spread: 0.0,
            bunker_accuracy_spread: 0.0,
            dispersion_ratio: 0.0,
            bunker_dispersion_ratio: 0.0,
            ..Default::default()
        }
    }

    fn session_on(layout: HoleLayout, tuning: Tuning) -> SimulationSession {
        let mut session = SimulationSession::with_layout(1, tuning, layout).unwrap();
        session.start().unwrap();
        session
    }

    fn run_until_rest(session: &mut SimulationSession) {
        for _ in 0..100_000 {
            session.advance(FRAME);
            assert!(session.ball().position.y >= 0.0);
            if !session.is_simulating() {
                return;
            }
        }
        panic!("shot never came to rest");
    }

    fn club(session: &SimulationSession, name: &str) -> Club {
        session.catalog().by_name(name).unwrap().clone()
    }

    fn place_ball(session: &mut SimulationSession, yards_short: f32, lie: Lie, phase: GamePhase) {
        let z = session.layout.green_position.z - session.layout.to_units(yards_short);
        session.ball = BallState {
            position: Vec3::new(0.0, BALL_RADIUS, z),
            velocity: Vec3::ZERO,
            lie,
        };
        session.phase = phase;
    }

    #[test]
    fn test_intro_to_tee_suggests_for_length() {
        let tuning = Tuning::default();
        let mut session =
            SimulationSession::with_layout(3, tuning.clone(), HoleLayout::flat(3, 150.0, &tuning))
                .unwrap();
        assert_eq!(session.phase(), GamePhase::Intro);
        assert_eq!(session.snapshot().hole_number, 1);
        session.start().unwrap();
        assert_eq!(session.phase(), GamePhase::Tee);
        assert_eq!(session.snapshot().suggested_club.name, "7 Iron");
        assert!(matches!(
            session.start(),
            Err(RequestRejected::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_shot_rejected_outside_swing_phases() {
        let mut session = SimulationSession::new(8);
        let driver = session.catalog().longest().clone();
        let before = session.snapshot();
        let err = session.request_shot(&driver, 100.0).unwrap_err();
        assert_eq!(
            err,
            RequestRejected::WrongPhase {
                action: "swing",
                phase: GamePhase::Intro
            }
        );
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_second_shot_while_simulating_is_rejected() {
        let tuning = pure_tuning();
        let mut session = session_on(HoleLayout::flat(4, 320.0, &tuning), tuning);
        let driver = session.catalog().longest().clone();
        session.request_shot(&driver, 100.0).unwrap();
        session.advance(FRAME);
        assert!(session.is_simulating());

        let before = session.snapshot();
        assert_eq!(
            session.request_shot(&driver, 100.0),
            Err(RequestRejected::ShotInProgress)
        );
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.stroke_count(), 1);
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut session = SimulationSession::new(21);
        session.start().unwrap();
        let a = session.snapshot();
        let b = session.snapshot();
        assert_eq!(a, b);
        // Advancing with nothing in motion changes nothing either
        session.advance(FRAME);
        assert_eq!(session.snapshot(), a);
    }

    #[test]
    fn test_driver_off_the_tee_reaches_fairway() {
        let tuning = pure_tuning();
        let mut session = session_on(HoleLayout::flat(4, 320.0, &tuning), tuning);
        let driver = session.catalog().longest().clone();
        session.request_shot(&driver, 100.0).unwrap();
        assert_eq!(session.phase(), GamePhase::Flying);
        run_until_rest(&mut session);

        let snap = session.snapshot();
        assert_eq!(snap.phase, GamePhase::Tee);
        assert_eq!(snap.lie, Lie::Fairway);
        assert_eq!(snap.stroke_count, 1);
        assert!((snap.distance_to_hole_yards - 60.0).abs() < 1.0);
        assert!(snap.suggested_club.max_carry_yards >= snap.distance_to_hole_yards);
        assert!(snap.suggested_club.max_carry_yards <= 100.0);
        assert!(snap.last_message.starts_with("Driver: 260y straight"));
    }

    #[test]
    fn test_driver_into_green_range_goes_to_putting() {
        let tuning = pure_tuning();
        // 260y carry leaves 10y on a 270y hole
        let mut session = session_on(HoleLayout::flat(4, 270.0, &tuning), tuning);
        let driver = session.catalog().longest().clone();
        session.request_shot(&driver, 100.0).unwrap();
        run_until_rest(&mut session);

        let snap = session.snapshot();
        assert_eq!(snap.lie, Lie::Green);
        assert_eq!(snap.phase, GamePhase::Putting);
        assert!(snap.suggested_club.is_putter());
    }

    #[test]
    fn test_putt_threshold_boundary_is_inclusive() {
        let tuning = pure_tuning();
        let mut session = session_on(HoleLayout::flat(4, 320.0, &tuning), tuning);
        let outcome = ShotOutcome {
            motion: ShotMotion::Flight,
            lie: Lie::Green,
            distance_to_hole_yards: 20.0,
            carry_yards: 300.0,
            lateral_yards: 0.0,
            tree_hits: 0,
        };
        session.phase = GamePhase::Flying;
        session.resolve_rest("Driver", outcome);
        assert_eq!(session.phase(), GamePhase::Putting);
    }

    #[test]
    fn test_holed_threshold_boundary_is_inclusive() {
        let tuning = pure_tuning();
        let mut session = session_on(HoleLayout::flat(3, 150.0, &tuning), tuning.clone());
        session.stroke_count = 1;
        let outcome = ShotOutcome {
            motion: ShotMotion::Flight,
            lie: Lie::Green,
            distance_to_hole_yards: tuning.holed_threshold_yards,
            carry_yards: 150.0,
            lateral_yards: 0.0,
            tree_hits: 0,
        };
        session.phase = GamePhase::Flying;
        session.resolve_rest("7 Iron", outcome);
        assert_eq!(session.phase(), GamePhase::HoleOut);
        let summary = session.summary().unwrap();
        assert_eq!(summary.label, "Hole-in-one");
    }

    #[test]
    fn test_flying_into_cup_is_hole_out() {
        let tuning = pure_tuning();
        // 7 iron carries exactly 155
        let mut session = session_on(HoleLayout::flat(3, 155.0, &tuning), tuning);
        let seven = club(&session, "7 Iron");
        session.request_shot(&seven, 100.0).unwrap();
        run_until_rest(&mut session);
        let snap = session.snapshot();
        assert_eq!(snap.phase, GamePhase::HoleOut);
        assert_eq!(snap.summary.unwrap().strokes, 1);
    }

    #[test]
    fn test_bunker_shot_is_double_penalized() {
        let tuning = pure_tuning();
        let mut session = session_on(HoleLayout::flat(5, 500.0, &tuning), tuning);
        place_ball(&mut session, 400.0, Lie::Bunker, GamePhase::Tee);
        let start_z = session.ball().position.z;

        let driver = session.catalog().longest().clone();
        session.request_shot(&driver, 100.0).unwrap();
        run_until_rest(&mut session);

        let travelled = session.layout().to_yards(session.ball().position.z - start_z);
        let expected = 260.0 * 0.6 * 0.2;
        assert!((travelled - expected).abs() < 0.5, "travelled {}", travelled);
    }

    #[test]
    fn test_landing_in_bunker_returns_to_tee_phase() {
        let tuning = pure_tuning();
        let mut layout = HoleLayout::flat(4, 320.0, &tuning);
        let landing = Vec3::new(0.0, 0.0, layout.to_units(260.0));
        layout.hazards.push(Hazard::Bunker {
            center: landing,
            radius_x: 6.0,
            radius_z: 6.0,
        });
        let mut session = session_on(layout, tuning);
        let driver = session.catalog().longest().clone();
        session.request_shot(&driver, 100.0).unwrap();
        run_until_rest(&mut session);

        let snap = session.snapshot();
        assert_eq!(snap.lie, Lie::Bunker);
        assert_eq!(snap.phase, GamePhase::Tee);
        assert!(snap.last_message.contains("bunker"));
    }

    #[test]
    fn test_water_costs_a_stroke_and_returns_to_tee() {
        let tuning = pure_tuning();
        let mut layout = HoleLayout::flat(4, 320.0, &tuning);
        let landing = Vec3::new(0.0, 0.0, layout.to_units(260.0));
        layout.hazards.push(Hazard::Water {
            center: landing,
            radius: 10.0,
        });
        let mut session = session_on(layout, tuning);
        let driver = session.catalog().longest().clone();
        session.request_shot(&driver, 100.0).unwrap();
        run_until_rest(&mut session);

        let snap = session.snapshot();
        assert_eq!(snap.stroke_count, 2);
        assert_eq!(snap.phase, GamePhase::Tee);
        assert_eq!(snap.lie, Lie::Tee);
        assert_eq!(snap.ball_position, crate::consts::TEE_ORIGIN);
        assert_eq!(snap.suggested_club.name, "Driver");
    }

    #[test]
    fn test_short_putt_returns_to_putting() {
        let tuning = Tuning {
            holed_threshold_yards: 0.2,
            ..pure_tuning()
        };
        let mut session = session_on(HoleLayout::flat(3, 150.0, &tuning), tuning);
        place_ball(&mut session, 5.0, Lie::Green, GamePhase::Putting);

        // 4.7y of a 40y putter
        let putter = session.catalog().putter().clone();
        session.request_shot(&putter, 4.7 / 40.0 * 100.0).unwrap();
        assert_eq!(session.phase(), GamePhase::RollingPutt);
        run_until_rest(&mut session);

        let snap = session.snapshot();
        assert_eq!(snap.phase, GamePhase::Putting);
        assert!((snap.distance_to_hole_yards - 0.3).abs() < 0.05);
        assert!(snap.last_message.starts_with("Putt rolled"));
    }

    #[test]
    fn test_putt_holes_out() {
        let tuning = pure_tuning();
        let mut session = session_on(HoleLayout::flat(3, 150.0, &tuning), tuning);
        place_ball(&mut session, 8.0, Lie::Green, GamePhase::Putting);
        session.stroke_count = 2;

        let putter = session.catalog().putter().clone();
        session.request_shot(&putter, 8.0 / 40.0 * 100.0).unwrap();
        run_until_rest(&mut session);

        let snap = session.snapshot();
        assert_eq!(snap.phase, GamePhase::HoleOut);
        let summary = snap.summary.unwrap();
        assert_eq!(summary.strokes, 3);
        assert_eq!(summary.label, "Par");
    }

    #[test]
    fn test_wrong_club_on_green_uses_putter() {
        let tuning = pure_tuning();
        let mut session = session_on(HoleLayout::flat(3, 150.0, &tuning), tuning);
        place_ball(&mut session, 10.0, Lie::Green, GamePhase::Putting);

        let driver = session.catalog().longest().clone();
        session.request_shot(&driver, 25.0).unwrap();
        assert_eq!(session.phase(), GamePhase::RollingPutt);
        assert_eq!(session.ball().velocity.y, 0.0);
        run_until_rest(&mut session);
        // 25% of the putter's 40y, not the driver's 260y
        assert!((session.snapshot().distance_to_hole_yards - 0.0).abs() < 0.1);
        assert_eq!(session.phase(), GamePhase::HoleOut);
    }

    #[test]
    fn test_reset_cancels_flight() {
        let tuning = pure_tuning();
        let mut session = session_on(HoleLayout::flat(4, 320.0, &tuning), tuning);
        let driver = session.catalog().longest().clone();
        session.request_shot(&driver, 100.0).unwrap();
        session.advance(FRAME);
        assert!(session.is_simulating());

        session.reset_hole();
        assert!(!session.is_simulating());
        let snap = session.snapshot();
        assert_eq!(snap.phase, GamePhase::Intro);
        assert_eq!(snap.stroke_count, 0);
        assert_eq!(snap.hole_number, 2);
        assert_eq!(snap.ball_position, crate::consts::TEE_ORIGIN);

        // The cancelled flight never resolves
        for _ in 0..600 {
            session.advance(FRAME);
        }
        assert_eq!(session.phase(), GamePhase::Intro);
    }

    #[test]
    fn test_next_hole_only_after_hole_out() {
        let tuning = pure_tuning();
        let mut session = session_on(HoleLayout::flat(3, 155.0, &tuning), tuning);
        assert!(session.next_hole().is_err());

        let seven = club(&session, "7 Iron");
        session.request_shot(&seven, 100.0).unwrap();
        run_until_rest(&mut session);
        assert_eq!(session.phase(), GamePhase::HoleOut);

        session.next_hole().unwrap();
        let snap = session.snapshot();
        assert_eq!(snap.phase, GamePhase::Intro);
        assert_eq!(snap.stroke_count, 0);
        assert_eq!(snap.hole_number, 2);
        assert!(snap.summary.is_none());
    }

    #[test]
    fn test_generate_hole_with_seed_is_reproducible() {
        let mut a = SimulationSession::new(1);
        let mut b = SimulationSession::new(2);
        let la = a.generate_hole(Some(99)).clone();
        let lb = b.generate_hole(Some(99)).clone();
        assert_eq!(la, lb);
    }

    #[test]
    fn test_same_seed_same_round() {
        let play = |seed: u64| {
            let mut session = SimulationSession::new(seed);
            session.start().unwrap();
            let driver = session.catalog().longest().clone();
            session.request_shot(&driver, 90.0).unwrap();
            run_until_rest(&mut session);
            session.snapshot()
        };
        assert_eq!(play(77), play(77));
    }

    proptest! {
        /// Property: strokes equal accepted shots plus water penalties
        #[test]
        fn prop_one_stroke_per_accepted_shot(
            seed in any::<u64>(),
            powers in proptest::collection::vec(1.0f32..=100.0, 1..6),
        ) {
            let mut session = SimulationSession::new(seed);
            session.start().unwrap();
            let mut accepted = 0u32;
            let mut penalties = 0u32;
            for power in powers {
                if session.phase() == GamePhase::HoleOut {
                    break;
                }
                let club = session.snapshot().suggested_club;
                prop_assert!(session.request_shot(&club, power).is_ok());
                accepted += 1;
                // A second request mid-shot never counts
                prop_assert!(session.request_shot(&club, power).is_err());
                run_until_rest(&mut session);
                let snap = session.snapshot();
                if snap.last_message.contains("Water!") {
                    penalties += 1;
                }
                prop_assert_eq!(snap.stroke_count, accepted + penalties);
            }
        }
    }
}
