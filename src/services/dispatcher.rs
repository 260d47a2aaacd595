use log::debug;
use std::pin::Pin;
use std::sync::Arc;
use std::task::Poll;
use tokio::sync::Mutex;
use tower::Service;

use crate::building::Building;
use crate::types::reply::Reply;
use crate::types::request::Request;

pub type SharedBuilding = Arc<Mutex<Building>>;

/// Applies requests to the building's elevator. The lock is held for the
/// whole request, so a `Move` drains fully before the next request runs.
#[derive(Debug, Clone)]
pub struct DispatcherService {
    building: SharedBuilding,
}

impl DispatcherService {
    pub fn new(building: SharedBuilding) -> Self {
        DispatcherService { building }
    }

    pub fn building(&self) -> SharedBuilding {
        Arc::clone(&self.building)
    }
}

fn apply(building: &mut Building, request: Request) -> Reply {
    let elevator = building.elevator_mut();
    let stops = match request {
        Request::AddTargetFloor(floor) => {
            elevator.add_target_floor(floor);
            Vec::new()
        }
        Request::AddPassenger(passenger) => {
            elevator.add_passenger(passenger);
            Vec::new()
        }
        Request::Move => elevator.drain(),
        Request::Status => Vec::new(),
    };
    Reply {
        current_floor: elevator.current_floor(),
        direction: elevator.direction(),
        onboard: elevator.passengers().len(),
        stops,
    }
}

impl Service<Request> for DispatcherService {
    type Response = Reply;
    type Error = anyhow::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Reply, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let building = Arc::clone(&self.building);
        Box::pin(async move {
            let mut guard = building.lock().await;
            debug!("dispatching {request}");
            Ok(apply(&mut guard, request))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::direction::Direction;
    use crate::types::passenger::Passenger;
    use tower::ServiceExt;

    fn service() -> DispatcherService {
        DispatcherService::new(Arc::new(Mutex::new(Building::new(10))))
    }

    #[tokio::test]
    async fn test_requests_drive_elevator() {
        let mut svc = service();
        let reply = svc
            .ready()
            .await
            .unwrap()
            .call(Request::AddPassenger(Passenger::new(3, 0, 0)))
            .await
            .unwrap();
        assert_eq!(reply.direction, Direction::Up);
        assert_eq!(reply.onboard, 1);
        assert!(reply.stops.is_empty());

        let reply = svc.ready().await.unwrap().call(Request::Move).await.unwrap();
        assert_eq!(reply.stops, vec![3]);
        assert_eq!(reply.current_floor, 3);
        assert_eq!(reply.onboard, 0);
        assert_eq!(reply.direction, Direction::None);
    }

    #[tokio::test]
    async fn test_status_does_not_change_state() {
        let mut svc = service();
        svc.ready()
            .await
            .unwrap()
            .call(Request::AddTargetFloor(6))
            .await
            .unwrap();
        let reply = svc.ready().await.unwrap().call(Request::Status).await.unwrap();
        assert_eq!(reply.current_floor, 0);
        assert_eq!(reply.direction, Direction::Up);

        let building = svc.building();
        assert_eq!(building.lock().await.elevator().pending_up(), vec![6]);
    }
}
