use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    image_sampler::app::run_select_images(std::env::args().skip(1))
}
