use geo::Coord;
use spade::{DelaunayTriangulation, Point2, Triangulation};

use crate::error::{CompactnessError, Result};

/// Compute the vertices of the Voronoi diagram of `points`.
///
/// Voronoi vertices are the circumcenters of the Delaunay triangles; points
/// sharing a circle yield repeated vertices.  Collinear input has no
/// triangles and therefore no vertices.
pub(crate) fn voronoi_vertices(points: &[Coord<f64>]) -> Result<Vec<Coord<f64>>> {
    let sites = points.iter().map(|c| Point2::new(c.x, c.y)).collect::<Vec<_>>();
    let triangulation = DelaunayTriangulation::<Point2<f64>>::bulk_load(sites)
        .map_err(|e| CompactnessError::Triangulation(format!("{e:?}")))?;

    Ok(triangulation.inner_faces()
        .map(|face| {
            let center = face.circumcenter();
            Coord { x: center.x, y: center.y }
        })
        .collect())
}
