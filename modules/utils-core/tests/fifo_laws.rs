use std::{cell::Cell, rc::Rc};

use ckit_utils_core_rs::collections::{LinkedQueue, LinkedQueueConfig};

/// Deterministic pseudo-random sequence used to drive mixed operation workloads.
struct Lcg(u64);

impl Lcg {
  fn next_value(&mut self) -> u64 {
    self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
    self.0 >> 33
  }
}

#[test]
fn n_enqueues_then_n_dequeues_round_trip_in_order() {
  for n in [0_usize, 1, 2, 17, 500] {
    let mut queue = LinkedQueue::new();
    for value in 0..n {
      queue.enqueue(value).unwrap();
    }
    let drained: Vec<usize> = std::iter::from_fn(|| queue.dequeue()).collect();
    assert_eq!(drained, (0..n).collect::<Vec<_>>(), "n = {n}");
    assert_eq!(queue.dequeue(), None);
  }
}

#[test]
fn mixed_workload_matches_vec_model() {
  let mut rng = Lcg(0x5eed);
  let mut queue = LinkedQueue::new();
  let mut model: Vec<u64> = Vec::new();
  let mut enqueued = 0_usize;
  let mut removed = 0_usize;

  for step in 0..5_000_u64 {
    match rng.next_value() % 5 {
      | 0 | 1 => {
        queue.enqueue(step).unwrap();
        model.push(step);
        enqueued += 1;
      },
      | 2 => {
        let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
        let actual = queue.dequeue();
        assert_eq!(actual, expected);
        removed += usize::from(actual.is_some());
      },
      | 3 => {
        let pos = (rng.next_value() as usize) % (model.len() + 2);
        let expected = (pos < model.len()).then(|| model.remove(pos));
        let actual = queue.remove_at(pos);
        assert_eq!(actual, expected);
        removed += usize::from(actual.is_some());
      },
      | _ => {
        let pos = (rng.next_value() as usize) % (model.len() + 2);
        assert_eq!(queue.at(pos), model.get(pos));
      },
    }

    assert_eq!(queue.len(), enqueued - removed);
    assert_eq!(queue.len(), model.len());
    assert_eq!(queue.front(), model.first());
    assert_eq!(queue.back(), model.last());
  }

  assert!(queue.iter().eq(model.iter()));
}

#[test]
fn remove_at_last_keeps_appending_after_new_tail() {
  let mut queue = LinkedQueue::new();
  queue.try_extend(["a", "b", "c"]).unwrap();

  assert_eq!(queue.remove_at(queue.len() - 1), Some("c"));
  assert_eq!(queue.remove_at(queue.len() - 1), Some("b"));
  queue.enqueue("d").unwrap();

  assert_eq!(queue.iter().copied().collect::<Vec<_>>(), ["a", "d"]);
  assert_eq!(queue.remove_at(queue.len() - 1), Some("d"));
  assert_eq!(queue.remove_at(queue.len() - 1), Some("a"));
  assert!(queue.is_empty());
  assert_eq!(queue.back(), None);
}

#[test]
fn visitor_receives_context_through_closure_capture() {
  struct Stats {
    visits: usize,
    total:  u32,
  }

  let mut queue = LinkedQueue::new();
  queue.try_extend([3_u32, 4, 5]).unwrap();

  let mut stats = Stats { visits: 0, total: 0 };
  queue.iterate(|item| {
    stats.visits += 1;
    stats.total += item;
  });

  assert_eq!(stats.visits, 3);
  assert_eq!(stats.total, 12);
  assert_eq!(queue.len(), 3);
}

#[test]
fn caller_keeps_ownership_of_shared_payloads() {
  let payloads: Vec<Rc<Cell<i32>>> = (0..3).map(Cell::new).map(Rc::new).collect();

  let mut queue: LinkedQueue<&Rc<Cell<i32>>> = LinkedQueue::new();
  queue.try_extend(payloads.iter()).unwrap();
  queue.iterate(|payload| payload.set(payload.get() * 2));
  queue.destroy();

  assert_eq!(payloads.iter().map(|payload| payload.get()).collect::<Vec<_>>(), [0, 2, 4]);
  assert!(payloads.iter().all(|payload| Rc::strong_count(payload) == 1));
}

#[test]
fn destroyed_queue_is_indistinguishable_from_new() {
  let config = LinkedQueueConfig::new(4);
  let mut queue = LinkedQueue::with_config(config).unwrap();
  queue.try_extend(0..10).unwrap();
  queue.remove_at(4);

  queue.destroy();

  assert_eq!(queue, LinkedQueue::new());
  assert_eq!(queue.config(), &config);
  queue.try_extend([7, 8]).unwrap();
  assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [7, 8]);
}
