// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Renderer owns the histograms and drives the sampling loop:
//! draw a candidate, measure its orbit, and if the orbit is long
//! enough but not too long, trace it into the histograms.  Repeat
//! until enough orbits have been traced.

use config::Config;
use error::Result;
use histogram::{Bands, Histograms};
use num::Complex;
use orbit::orbital_length;
use planes::PlaneMapper;
use rand::Rng;
use sampler::Sampler;
use tonemap::RenderedImage;

/// Half-width of the complex window stretched over the image.
pub const VIEW_RADIUS: f64 = 2.0;

/// Counters from a sampling run.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Stats {
    /// Candidates admitted by the exclusion test and iterated.
    pub candidates: u64,
    /// Orbits that fell inside the length window and were traced.
    pub traced: u64,
    /// Orbit positions written to a histogram.
    pub recorded: u64,
}

/// A configured render in progress.
pub struct Renderer {
    config: Config,
    bands: Bands,
    plane: PlaneMapper,
    histograms: Histograms,
}

impl Renderer {
    /// Validate `config` and allocate the histograms.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let plane = PlaneMapper::new(
            config.width,
            config.height,
            Complex::new(-VIEW_RADIUS, -VIEW_RADIUS),
            Complex::new(VIEW_RADIUS, VIEW_RADIUS),
        )?;
        debug!(
            "allocating {} histogram cells per channel",
            plane.len()
        );
        Ok(Renderer {
            bands: config.bands(),
            histograms: Histograms::new(config.width, config.height),
            plane,
            config,
        })
    }

    /// The configuration this renderer was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The histograms accumulated so far.
    pub fn histograms(&self) -> &Histograms {
        &self.histograms
    }

    /// Does an orbit of this length get traced?
    pub fn accepts(&self, length: usize) -> bool {
        length > self.config.min_length && length < self.config.max_length
    }

    /// Sample until `config.samples` orbits have been traced, calling
    /// `progress(done, total)` every `config.ticker` traced orbits.
    ///
    /// This has no other exit.  A length window that almost nothing
    /// falls into makes it run for a very long time.
    pub fn run<R, F>(&mut self, rng: R, mut progress: F) -> Stats
    where
        R: Rng,
        F: FnMut(usize, usize),
    {
        let exclusion = self.config.exclusion;
        let mut sampler = Sampler::new(self.config.sample_radius, &exclusion, rng);
        let (total, depth, ticker) = (
            self.config.samples,
            self.config.max_length,
            self.config.ticker,
        );
        info!(
            "tracing {} orbits of length ({}, {}) with {} exclusion",
            total, self.config.min_length, depth, exclusion
        );

        let mut stats = Stats::default();
        let mut done = 0;
        while done < total {
            let c = sampler.candidate();
            stats.candidates += 1;
            let length = orbital_length(c, depth);
            if !self.accepts(length) {
                continue;
            }
            let recorded = self.histograms.trace(&self.plane, &self.bands, c, length);
            stats.recorded += recorded as u64;
            stats.traced += 1;
            done += 1;
            if done % ticker == 0 {
                progress(done, total);
            }
        }

        info!(
            "traced {} of {} candidates, {} points recorded",
            stats.traced, stats.candidates, stats.recorded
        );
        stats
    }

    /// Tone map the histograms into an image.
    pub fn image(&self) -> RenderedImage {
        RenderedImage::from_histograms(&self.histograms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use histogram::{Band, Channel};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small() -> Config {
        Config {
            width: 32,
            height: 32,
            min_length: 5,
            max_length: 200,
            red: Band::new(50, 200),
            green: Band::new(20, 49),
            blue: Band::new(0, 19),
            samples: 50,
            ticker: 10,
            ..Config::default()
        }
    }

    #[test]
    fn invalid_configs_never_allocate() {
        assert!(Renderer::new(Config { width: 0, ..small() }).is_err());
    }

    #[test]
    fn window_is_exclusive_at_both_ends() {
        let renderer = Renderer::new(small()).unwrap();
        assert!(!renderer.accepts(5));
        assert!(renderer.accepts(6));
        assert!(renderer.accepts(199));
        assert!(!renderer.accepts(200));
    }

    #[test]
    fn run_traces_exactly_the_requested_samples() {
        let mut renderer = Renderer::new(small()).unwrap();
        let mut ticks = vec![];
        let stats = renderer.run(StdRng::seed_from_u64(42), |done, total| {
            ticks.push((done, total))
        });

        assert_eq!(stats.traced, 50);
        assert!(stats.candidates >= 50);
        assert_eq!(ticks, vec![(10, 50), (20, 50), (30, 50), (40, 50), (50, 50)]);

        let histograms = renderer.histograms();
        let total: u64 = Channel::ALL
            .iter()
            .map(|c| histograms.channel(*c).total())
            .sum();
        assert_eq!(total, stats.recorded);
        // Every traced orbit is at least 6 long, and its first five
        // positions are inside the escape radius, hence on the grid.
        assert!(stats.recorded >= 5 * 50);
    }

    #[test]
    fn same_seed_same_picture() {
        let mut a = Renderer::new(small()).unwrap();
        let mut b = Renderer::new(small()).unwrap();
        a.run(StdRng::seed_from_u64(9), |_, _| ());
        b.run(StdRng::seed_from_u64(9), |_, _| ());
        assert_eq!(a.histograms(), b.histograms());
        assert_eq!(a.image(), b.image());
    }

    #[test]
    fn image_has_the_configured_shape() {
        let mut renderer = Renderer::new(small()).unwrap();
        renderer.run(StdRng::seed_from_u64(1), |_, _| ());
        let image = renderer.image();
        assert_eq!((image.width(), image.height()), (32, 32));
        let brightest = Channel::ALL
            .iter()
            .filter_map(|c| image.channel(*c).iter().cloned().max())
            .max();
        assert_eq!(brightest, Some(255));
    }
}
