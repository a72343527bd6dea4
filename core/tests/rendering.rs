use rasterfall_core::prelude::*;

const WHITE: Color4 = rgb(0xFF, 0xFF, 0xFF);

fn flat_white() -> Flat {
    Flat(WHITE)
}

#[test]
fn flat_triangle_covers_lower_left_half() {
    // A triangle spanning the lower-left NDC half-square. With the
    // y-flipping viewport, NDC (-1, -1) is the bottom-left corner of the
    // screen, so the covered pixels end up in rows with larger y.
    let verts: [Vec3<Model>; 3] = [
        vec3(-1.0, -1.0, 0.0),
        vec3(1.0, -1.0, 0.0),
        vec3(-1.0, 1.0, 0.0),
    ];

    let (w, h) = (8, 8);
    let uni = Uniforms {
        viewport: viewport(w, h),
        ..Uniforms::identity()
    };
    let mut framebuf = Buf2::<u32>::new((w, h));
    let ctx = Context::default();

    render(&verts, &flat_white(), &uni, &mut framebuf, &ctx)
        .expect("pipeline should accept a whole triangle");

    // Screen-space vertices are (0, 8), (8, 8), (0, 0); pixel centers
    // are covered iff x <= y.
    for y in 0..h {
        for x in 0..w {
            let expect = if x <= y { WHITE.to_argb_u32() } else { 0 };
            assert_eq!(framebuf[[x, y]], expect, "pixel ({x}, {y})");
        }
    }

    let stats = ctx.stats.borrow();
    assert_eq!(stats.tris.o, 1);
    assert_eq!(stats.frags.i, stats.frags.o);
}

#[test]
fn mesh_expansion_assembles_into_face_triangles() {
    let verts = vec![
        vec3(0.0, 0.0, 0.0),
        vec3(1.0, 0.0, 0.0),
        vec3(0.0, 1.0, 0.0),
        vec3(0.0, 0.0, 1.0),
    ];
    let faces = [[0, 1, 2], [1, 2, 3]]
        .map(|idcs| Face(idcs.map(VertRef::pos).to_vec()))
        .to_vec();
    let mesh = Mesh::new(faces, verts);

    let tris = assemble(&mesh.vertex_array()).unwrap();

    assert_eq!(tris.len(), mesh.faces.len());
    for (t, face) in tris.iter().zip(&mesh.faces) {
        for (v, r) in t.0.iter().zip(&face.0) {
            assert_eq!(*v, mesh.verts[r.pos]);
        }
    }
}

#[test]
fn origin_projects_to_screen_center() {
    let cam = Camera {
        pos: vec3(0.0, 0.0, 5.0),
        target: Vec3::zero(),
        up: vec3(0.0, 1.0, 0.0),
    };
    let uni = Uniforms {
        model: Mat4::identity(),
        view: cam.world_to_view(),
        projection: perspective(degs(90.0), 1.0, 0.1..100.0),
        viewport: viewport(64, 64),
    };

    let s = transform(Vec3::zero(), &uni)
        .expect("a vertex in front of the camera should be renderable");
    rasterfall_core::assert_approx_eq!(s.x(), 32.0);
    rasterfall_core::assert_approx_eq!(s.y(), 32.0);
}

#[test]
fn degenerate_triangle_renders_nothing() {
    let verts: [Vec3<Model>; 3] = [vec3(0.25, 0.25, 0.0); 3];

    let uni = Uniforms {
        viewport: viewport(8, 8),
        ..Uniforms::identity()
    };
    let mut framebuf = Buf2::<u32>::new((8, 8));
    let ctx = Context::default();

    render(&verts, &flat_white(), &uni, &mut framebuf, &ctx).unwrap();

    assert!(framebuf.data().iter().all(|&px| px == 0));
    assert_eq!(ctx.stats.borrow().frags.i, 0);
}

#[test]
fn uneven_vertex_count_fails_the_pass() {
    let verts: [Vec3<Model>; 4] = [vec3(0.0, 0.0, 0.0); 4];

    let mut framebuf = Buf2::<u32>::new((8, 8));
    let ctx = Context::default();

    let res = render(
        &verts,
        &flat_white(),
        &Uniforms::identity(),
        &mut framebuf,
        &ctx,
    );
    assert_eq!(res, Err(Error::PrimitiveCount(4)));
}

#[test]
fn triangle_on_projection_plane_is_skipped() {
    // With a perspective projection, w = -z_view: the first vertex sits
    // exactly on the projection plane and is unrenderable, so the whole
    // triangle is skipped rather than failing the pass.
    let verts: [Vec3<Model>; 3] = [
        vec3(0.0, 0.0, 0.0),
        vec3(1.0, 0.0, -1.0),
        vec3(0.0, 1.0, -1.0),
    ];

    let uni = Uniforms {
        projection: perspective(degs(90.0), 1.0, 0.1..100.0),
        viewport: viewport(8, 8),
        ..Uniforms::identity()
    };
    let mut framebuf = Buf2::<u32>::new((8, 8));
    let ctx = Context::default();

    render(&verts, &flat_white(), &uni, &mut framebuf, &ctx).unwrap();

    assert!(framebuf.data().iter().all(|&px| px == 0));
    let stats = ctx.stats.borrow();
    assert_eq!(stats.tris.i, 1);
    assert_eq!(stats.tris.o, 0);
}
