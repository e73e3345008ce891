use pose_turtle::{TurtleError, TurtleInterpreter, TurtleOp};
use std::f64::consts::TAU;
use tracing::Level;

fn main() -> Result<(), TurtleError> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let ops = [
        TurtleOp::Forward(100.0),
        TurtleOp::Right(TAU / 4.0),
        TurtleOp::Forward(50.0),
        TurtleOp::Left(TAU / 8.0),
    ];

    let turtle = TurtleInterpreter::default().run(&ops)?;
    println!("{}", turtle.debug());

    tracing::info!("turtle finished");
    println!("Bye!");
    Ok(())
}
